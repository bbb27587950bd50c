//! Project configuration for a generation run
//!
//! This module contains the configuration system components:
//! - `types`: The resolved [`ProjectConfig`] and the [`Database`] choice
//! - `partial`: Optional raw values coming from flags and answers documents
//! - `resolver`: Merges every source into one validated configuration
//! - `context`: Turns a configuration into the template rendering context

pub mod context;
pub mod partial;
pub mod resolver;
pub mod types;

// Re-export commonly used types for convenience
pub use context::render_context;
pub use partial::PartialConfig;
pub use resolver::OptionResolver;
pub use types::{Database, ProjectConfig};
