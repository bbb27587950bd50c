/// Handles argument parsing and drives a generation run.
pub mod cli;

/// Project options: sources, resolution and the resolved configuration.
pub mod config;

/// Defaults and allowed values.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// Template rendering functionality.
pub mod renderer;

/// The project skeleton and its processing.
pub mod template;

/// Answer validators
pub mod validation;

/// Writes rendered projects to disk.
pub mod writer;
