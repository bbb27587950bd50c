use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A flag, answer or prompt value outside the allowed set.
    #[error("Invalid value '{value}' for '{field}': {reason}.")]
    InvalidOption { field: String, value: String, reason: String },

    /// Non-interactive mode was requested but a field without a default is missing.
    #[error("Missing required input '{field}'. Pass it on the command line or drop --no-interactive.")]
    MissingRequiredInput { field: String },

    #[error("Cannot proceed: destination directory '{path}' already exists. Remove it, choose a different name or use --force.")]
    DestinationExists { path: String },

    #[error("Cannot proceed: directory '{path}' is not empty. Use --force to scaffold into it anyway.")]
    DestinationNotEmpty { path: String },

    #[error("Filesystem error at '{}': {source}.", path.display())]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Two template entries render to the same path '{path}'.")]
    DuplicateOutputPath { path: String },

    #[error("Failed to render. Original error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Failed to parse answers. Original error: {0}")]
    AnswersParse(#[from] serde_json::Error),

    #[error("Prompt failed. Original error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

impl Error {
    pub fn invalid_option(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidOption { field: field.into(), value: value.into(), reason: reason.into() }
    }
}

/// Convenience type alias for Results with Blueprint's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
