//! Materializes rendered entries on disk

use crate::{
    error::{Error, Result},
    ioutils::{create_dir_all, is_dir_empty, write_file},
    template::{RenderedEntry, TemplateOperation},
};
use std::path::{Path, PathBuf};

/// Where the project is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A new `<parent>/<name>` directory.
    Subdirectory(PathBuf),
    /// The output directory itself (`new .`).
    InPlace(PathBuf),
}

impl Destination {
    pub fn root(&self) -> &Path {
        match self {
            Destination::Subdirectory(root) | Destination::InPlace(root) => root,
        }
    }

    /// Rejects a destination that already holds files unless `force` is set.
    pub fn check(&self, force: bool) -> Result<()> {
        let conflict = match self {
            Destination::Subdirectory(root) if root.exists() => {
                Error::DestinationExists { path: root.display().to_string() }
            }
            Destination::InPlace(root) if !is_dir_empty(root)? => {
                Error::DestinationNotEmpty { path: root.display().to_string() }
            }
            _ => return Ok(()),
        };

        if !force {
            return Err(conflict);
        }
        log::warn!("{}: writing anyway because --force was given", self.root().display());
        Ok(())
    }
}

/// Writes rendered entries below a project root.
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Turns rendered entries into operations against `root`.
    pub fn plan(&self, root: &Path, entries: Vec<RenderedEntry>) -> Vec<TemplateOperation> {
        entries
            .into_iter()
            .map(|entry| match entry {
                RenderedEntry::Directory(path) => {
                    let target = root.join(path);
                    let target_exists = target.is_dir();
                    TemplateOperation::CreateDirectory { target, target_exists }
                }
                RenderedEntry::File(file) => {
                    let target = root.join(file.path);
                    let target_exists = target.exists();
                    TemplateOperation::Write { target, content: file.content, target_exists }
                }
            })
            .collect()
    }

    /// Creates `root` and writes every entry, stopping at the first failure.
    ///
    /// Entries written before a failure stay on disk.
    pub fn write_all(&self, root: &Path, entries: Vec<RenderedEntry>) -> Result<()> {
        if !self.dry_run {
            create_dir_all(root)?;
        }

        for operation in self.plan(root, entries) {
            self.handle_file_operation(&operation).inspect_err(|e| {
                log::error!("Failed to {}: {e}", operation.error_context());
            })?;
            log::info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }

    fn handle_file_operation(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {}", operation.error_context());
        if self.dry_run {
            return Ok(());
        }

        match operation {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    create_dir_all(target)?;
                }
                Ok(())
            }
            TemplateOperation::Write { target, content, .. } => write_file(content, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RenderedFile;
    use tempfile::TempDir;

    fn entries() -> Vec<RenderedEntry> {
        vec![
            RenderedEntry::Directory(PathBuf::from("src/demo/domain")),
            RenderedEntry::File(RenderedFile {
                path: PathBuf::from("src/demo/__init__.py"),
                content: String::new(),
            }),
            RenderedEntry::File(RenderedFile {
                path: PathBuf::from("README.md"),
                content: "# Demo\n".to_string(),
            }),
        ]
    }

    #[test]
    fn writes_entries_below_root() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("demo");

        FileWriter::new(false).write_all(&root, entries()).unwrap();

        assert!(root.join("src/demo/domain").is_dir());
        assert_eq!(std::fs::read_to_string(root.join("src/demo/__init__.py")).unwrap(), "");
        assert_eq!(std::fs::read_to_string(root.join("README.md")).unwrap(), "# Demo\n");
    }

    #[test]
    fn dry_run_touches_nothing() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("demo");

        FileWriter::new(true).write_all(&root, entries()).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn plan_flags_existing_targets() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("README.md"), "old").unwrap();

        let plan = FileWriter::new(false).plan(root.path(), entries());

        let readme = plan
            .iter()
            .find(|op| op.target_path().ends_with("README.md"))
            .unwrap();
        assert!(matches!(readme, TemplateOperation::Write { target_exists: true, .. }));
        assert!(plan[..2].iter().all(|op| !matches!(
            op,
            TemplateOperation::Write { target_exists: true, .. }
                | TemplateOperation::CreateDirectory { target_exists: true, .. }
        )));
    }

    #[test]
    fn first_failure_stops_the_run() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("demo");
        std::fs::create_dir_all(&root).unwrap();
        // A file where a directory is expected.
        std::fs::write(root.join("src"), "").unwrap();

        let err = FileWriter::new(false).write_all(&root, entries()).unwrap_err();

        match err {
            Error::FilesystemError { path, .. } => assert!(path.starts_with(root.join("src"))),
            other => panic!("Expected FilesystemError, got {other:?}"),
        }
        assert!(!root.join("README.md").exists());
    }

    #[test]
    fn existing_subdirectory_is_rejected() {
        let parent = TempDir::new().unwrap();
        let destination = Destination::Subdirectory(parent.path().to_path_buf());

        assert!(matches!(destination.check(false), Err(Error::DestinationExists { .. })));
        assert!(destination.check(true).is_ok());
    }

    #[test]
    fn missing_subdirectory_is_accepted() {
        let parent = TempDir::new().unwrap();
        let destination = Destination::Subdirectory(parent.path().join("demo"));
        assert!(destination.check(false).is_ok());
    }

    #[test]
    fn in_place_requires_an_empty_directory() {
        let dir = TempDir::new().unwrap();
        let destination = Destination::InPlace(dir.path().to_path_buf());
        assert!(destination.check(false).is_ok());

        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        assert!(matches!(destination.check(false), Err(Error::DestinationNotEmpty { .. })));
        assert!(destination.check(true).is_ok());
    }
}
