//! Tree operations: merge

mod merge;

pub use merge::apply;
