//! Error types for htmangl

use crate::document::Role;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for htmangl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around a merge.
///
/// The merge itself cannot fail; these come from reading, parsing and
/// writing documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("read {role} file {}: {source}", .path.display())]
    Read {
        role: Role,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {role} document {}: {source}", .path.display())]
    Parse {
        role: Role,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write output: {0}")]
    Write(#[from] std::io::Error),
}
