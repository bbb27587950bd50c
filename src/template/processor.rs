use indexmap::IndexMap;
use std::path::{Component, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::entry::{RenderedEntry, RenderedFile};
use super::node::{NodeKind, TemplateNode};

/// Renders selected nodes into [`RenderedEntry`] records.
///
/// Rendering happens fully in memory and never touches the filesystem.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    context: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, context: &'a serde_json::Value) -> Self {
        Self { engine, context }
    }

    /// Validates that rendering did not leave an empty component behind.
    ///
    /// # Arguments
    /// * `template_path` - The node path with placeholders
    /// * `rendered_path` - The path after rendering with the context
    ///
    /// # Examples
    ///
    /// Valid case:
    /// - Template path: `src/{{ package_name }}/__init__.py`
    /// - Rendered path: `src/demo/__init__.py`
    ///
    /// Invalid case:
    /// - Template path: `src/{{ package_name }}/__init__.py`
    /// - Rendered path (with an empty package name): `src//__init__.py`
    ///
    fn has_valid_rendered_path_parts(&self, template_path: &str, rendered_path: &str) -> bool {
        let template_parts: Vec<&str> = template_path.split('/').collect();
        let rendered_parts: Vec<&str> = rendered_path.split('/').collect();

        template_parts.len() == rendered_parts.len()
            && template_parts
                .iter()
                .zip(rendered_parts.iter())
                .all(|(template_part, rendered_part)| {
                    template_part.is_empty() || !rendered_part.is_empty()
                })
    }

    /// Renders the node path and checks it stays inside the project root.
    fn render_node_path(&self, node: &TemplateNode) -> Result<PathBuf> {
        let rendered = self.engine.render(node.path, self.context)?;

        if !self.has_valid_rendered_path_parts(node.path, &rendered) {
            return Err(Error::ProcessError {
                source_path: rendered,
                e: "The rendered path is not valid".to_string(),
            });
        }

        let rendered = PathBuf::from(rendered);
        if rendered.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(Error::ProcessError {
                source_path: rendered.display().to_string(),
                e: "The rendered path escapes the project root".to_string(),
            });
        }

        Ok(rendered)
    }

    /// Renders the path and, for template-backed files, the content of one node.
    pub fn process(&self, node: &TemplateNode) -> Result<RenderedEntry> {
        let path = self.render_node_path(node)?;

        match node.kind {
            NodeKind::Directory => Ok(RenderedEntry::Directory(path)),
            NodeKind::EmptyFile => {
                Ok(RenderedEntry::File(RenderedFile { path, content: String::new() }))
            }
            NodeKind::Template(name) => {
                log::trace!("Rendering '{name}' for '{}'", node.path);
                let content = self.engine.render_named(name, self.context)?;
                Ok(RenderedEntry::File(RenderedFile { path, content }))
            }
        }
    }

    /// Processes every node, rejecting two nodes that land on the same path.
    pub fn process_all(&self, nodes: &[&TemplateNode]) -> Result<Vec<RenderedEntry>> {
        let mut rendered: IndexMap<PathBuf, RenderedEntry> = IndexMap::new();
        for node in nodes {
            let entry = self.process(node)?;
            let path = entry.path().to_path_buf();
            if rendered.contains_key(&path) {
                return Err(Error::DuplicateOutputPath { path: path.display().to_string() });
            }
            rendered.insert(path, entry);
        }
        log::debug!("Rendered {} entries", rendered.len());
        Ok(rendered.into_values().collect())
    }
}
