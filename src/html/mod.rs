//! HTML parsing and serialization for [`Node`](crate::model::Node) trees
//!
//! Parsing goes through html5ever's HTML5 tree builder, so malformed
//! markup is recovered the way browsers recover it rather than rejected.

mod parse;
mod render;

pub use parse::{parse_reader, parse_str};
pub use render::{render, to_html};
