//! Errors reported by the sorting and selection routines.

use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

/// Failure of a sort or selection call.
///
/// Every error is raised before the input slice is written to, so on `Err` the slice still holds
/// its original elements and all temporary buffers have been released.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A temporary buffer could not be allocated.
    #[error("failed to allocate {what} for {len} elements")]
    AllocFailed {
        /// Which buffer, e.g. `"merge scratch buffer"`.
        what: &'static str,
        /// Number of elements requested.
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// The caller supplied scratch buffer can't hold a copy of the input.
    #[error("scratch buffer holds {len} elements, but {required} are required")]
    ScratchTooSmall { required: usize, len: usize },

    /// An order statistic was requested from an empty slice.
    #[error("cannot select an element from an empty slice")]
    EmptyInput,

    #[error("index {index} is out of range for a slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl SortError {
    pub(crate) fn alloc_failed(what: &'static str, len: usize, source: TryReserveError) -> Self {
        log::warn!("allocation of {what} for {len} elements failed: {source}");

        Self::AllocFailed { what, len, source }
    }
}
