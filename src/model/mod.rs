//! Core data model types for htmangl

mod directive;
mod node;

pub use directive::{Directive, COPY_MARKER, INSERT_MARKER};
pub use node::{Node, NodeData};
