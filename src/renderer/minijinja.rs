use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are errors, so a template can never silently render a
/// placeholder the project configuration does not provide.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // Generated files are source code, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);

        Self { env }
    }

    /// Creates a renderer with every `(name, source)` template registered.
    pub fn with_templates(templates: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut renderer = Self::new();
        for (name, source) in templates {
            renderer.add_template(name, source)?;
        }
        Ok(renderer)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<()> {
        log::trace!("Registering template '{name}'");
        Ok(self.env.add_template(name, source)?)
    }

    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }

    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
