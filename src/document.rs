//! Loading documents from disk and merging them

use crate::html;
use crate::model::Node;
use crate::ops;
use crate::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info_span};

/// Which side of a merge a document plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The template supplying the page outline
    Base,
    /// The content merged into the template
    Apply,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Base => f.write_str("base"),
            Role::Apply => f.write_str("apply"),
        }
    }
}

/// Read and parse the document at `path`
pub fn load(path: impl AsRef<Path>, role: Role) -> Result<Node> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Read {
        role,
        path: path.to_path_buf(),
        source,
    })?;

    let doc = html::parse_reader(&mut BufReader::new(file)).map_err(|source| Error::Parse {
        role,
        path: path.to_path_buf(),
        source,
    })?;

    debug!(%role, path = %path.display(), "loaded document");
    Ok(doc)
}

/// Load both documents and merge `apply` into `base` at the document root
pub fn merge_files(base: impl AsRef<Path>, apply: impl AsRef<Path>) -> Result<Node> {
    let _span = info_span!("merge_files").entered();

    let base_doc = load(base, Role::Base)?;
    let apply_doc = load(apply, Role::Apply)?;
    Ok(ops::apply(base_doc, apply_doc))
}
