use std::path::PathBuf;

/// A single filesystem change planned for the generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => target,
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    ///
    /// # Returns
    /// * `String` - A concise description including the operation type and path
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }
        }
    }
}
