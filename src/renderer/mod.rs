//! Template rendering for paths and file bodies.

mod filters;
pub mod interface;
pub mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
pub use interface::TemplateRenderer;
