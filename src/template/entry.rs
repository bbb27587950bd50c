use std::path::{Path, PathBuf};

/// A rendered file, its path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Output of rendering one selected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry {
    Directory(PathBuf),
    File(RenderedFile),
}

impl RenderedEntry {
    pub fn path(&self) -> &Path {
        match self {
            RenderedEntry::Directory(path) => path,
            RenderedEntry::File(file) => &file.path,
        }
    }
}
