//! Slice routines that are not sorts, but share their comparison and error model.

pub mod selection;
pub mod shuffle;
