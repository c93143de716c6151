//! Merge directives embedded in base documents as HTML comments

use std::fmt;

/// Comment body marking where applied content is inserted
pub const INSERT_MARKER: &str = "htmangl:insert";

/// Comment body switching a parent into copy mode
pub const COPY_MARKER: &str = "htmangl:copy";

/// A placement directive recognized inside a base document
///
/// Directives are plain comments such as `<!-- htmangl:insert -->`. The
/// comment body is trimmed and then compared exactly; case and inner
/// whitespace must match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Unmatched applied children are placed here instead of at the end
    Insert,
    /// Keep base children shallowly and append every applied child
    Copy,
}

impl Directive {
    /// Recognize a directive from a raw comment body
    pub fn parse(comment: &str) -> Option<Self> {
        match comment.trim() {
            INSERT_MARKER => Some(Directive::Insert),
            COPY_MARKER => Some(Directive::Copy),
            _ => None,
        }
    }

    /// The comment body for this directive
    pub fn marker(&self) -> &'static str {
        match self {
            Directive::Insert => INSERT_MARKER,
            Directive::Copy => COPY_MARKER,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}
