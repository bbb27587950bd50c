//! Project skeleton and template processing
//!
//! - `node`: One entry of the skeleton and its inclusion rule
//! - `manifest`: The full skeleton
//! - `entry`: Rendered output records
//! - `embedded`: Template sources compiled into the binary
//! - `selector`: Picks the nodes that apply to a configuration
//! - `processor`: Renders selected nodes into entries
//! - `operation`: Filesystem changes planned for rendered entries

pub mod embedded;
pub mod entry;
pub mod manifest;
pub mod node;
pub mod operation;
pub mod processor;
pub mod selector;

pub use embedded::TEMPLATES;
pub use entry::{RenderedEntry, RenderedFile};
pub use manifest::MANIFEST;
pub use node::{Include, NodeKind, TemplateNode};
pub use operation::TemplateOperation;
pub use processor::TemplateProcessor;
