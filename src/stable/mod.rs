//! Sorts that preserve the relative order of equal elements.

pub mod insertion;
pub mod merge;
