//! # htmangl
//!
//! Combine two HTML documents: a "base" template holding the outline of a
//! page and an "apply" document holding the content.
//!
//! ## How documents combine
//!
//! - Children at each level are matched by tag name; matched pairs are
//!   combined recursively and the applied children follow the base ones.
//! - Applied children without a partner are appended to the parent, or
//!   placed where the base has a `<!-- htmangl:insert -->` comment.
//! - A `<!-- htmangl:copy -->` comment keeps the parent's base children
//!   (without their content) and appends every applied child.
//!
//! ## Example
//!
//! ```
//! use htmangl::{apply, html};
//!
//! let base = html::parse_str("<body><header>H</header><!-- htmangl:insert --><footer>F</footer></body>");
//! let content = html::parse_str("<body><p>C</p></body>");
//!
//! let merged = apply(base, content);
//! assert_eq!(
//!     html::to_html(&merged),
//!     "<html><head></head><body><header>H</header><p>C</p><footer>F</footer></body></html>"
//! );
//! ```

pub mod document;
pub mod html;
pub mod model;
pub mod ops;
pub mod ordered_map;
pub mod telemetry;

mod error;

pub use document::{load, merge_files, Role};
pub use error::{Error, Result};
pub use model::{Directive, Node, NodeData};
pub use ops::apply;
pub use ordered_map::OrderedMap;
