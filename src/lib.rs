//! Comparison based sorting and order statistics over mutable slices.
//!
//! Every algorithm is generic over the element type and driven by an `is_less` predicate that
//! has to be a strict weak order. The algorithms live in one module each, grouped by whether they
//! are stable. Each module offers `sort` for `Ord` types and `sort_by` with a predicate, the
//! functions at the crate root are shorthands for the predicate versions.
//!
//! Calls that need memory allocate it fallibly and report [`SortError::AllocFailed`] instead of
//! aborting. Nothing outlives a call.

use std::mem;

mod algorithm;
mod error;

pub mod other;
pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use error::{Result, SortError};

/// Insertion sort, see [`stable::insertion`].
#[inline]
pub fn sort_insertion<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    stable::insertion::sort_by(v, is_less)
}

/// Comb sort, see [`unstable::comb`].
#[inline]
pub fn sort_comb<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    unstable::comb::sort_by(v, is_less)
}

/// Heap sort, see [`unstable::heap`].
#[inline]
pub fn sort_heap<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    unstable::heap::sort_by(v, is_less)
}

/// Introsort, see [`unstable::intro`].
#[inline]
pub fn sort_introsort<T, F>(v: &mut [T], is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    unstable::intro::sort_by(v, is_less)
}

/// Stable merge sort, see [`stable::merge`]. Uses `scratch` if given, which must hold at least
/// `v.len()` elements, and allocates a buffer otherwise.
#[inline]
pub fn merge_sort<T, F>(v: &mut [T], is_less: F, scratch: Option<&mut [T]>) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    match scratch {
        Some(scratch) => stable::merge::sort_by_with_scratch(v, scratch, is_less),
        None => stable::merge::sort_by(v, is_less),
    }
}

/// Order statistic selection, see [`other::selection`].
#[inline]
pub fn select_kth<T, F>(v: &mut [T], is_less: F, k: usize) -> Result<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    other::selection::select_kth_by(v, k, is_less)
}

pub(crate) const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}
