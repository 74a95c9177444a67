//! Bottom-up merge sort.
//!
//! Stable, *O*(*n* \* log(*n*)) worst-case, and needs scratch space for `n` elements. The scratch
//! space is either provided by the caller or allocated for the duration of the call. Elements are
//! cloned between the two buffers, hence the `T: Clone` bound.

use std::cmp;

use crate::{Result, SortError};

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<()>
where
    T: Ord + Clone,
{
    stable_sort(v, None, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    stable_sort(v, None, &mut is_less)
}

/// Same as [`sort_by`], but uses `scratch` instead of allocating. `scratch` must hold at least
/// `v.len()` elements, its contents are unspecified after the call.
#[inline]
pub fn sort_by_with_scratch<T, F>(v: &mut [T], scratch: &mut [T], mut is_less: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    stable_sort(v, Some(scratch), &mut is_less)
}

fn stable_sort<T, F>(v: &mut [T], scratch: Option<&mut [T]>, is_less: &mut F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if crate::is_zst::<T>() || len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    match scratch {
        Some(scratch) => {
            if scratch.len() < len {
                return Err(SortError::ScratchTooSmall {
                    required: len,
                    len: scratch.len(),
                });
            }

            merge_sort(v, &mut scratch[..len], 1, false, is_less);
        }
        None => {
            let mut buf = Vec::new();
            buf.try_reserve_exact(len)
                .map_err(|err| SortError::alloc_failed("merge scratch buffer", len, err))?;
            log::trace!("allocated merge scratch buffer for {len} elements");

            // The width 1 pass fills the fresh buffer, so no element is cloned just to initialize it.
            merge_pairs_into(v, &mut buf, is_less);
            merge_sort(v, &mut buf, 2, true, is_less);
        }
    }

    Ok(())
}

/// The two buffer roles of the merge passes.
///
/// `v` and `scratch` alternate between being read and being written. Whenever the latest complete
/// pass lives in `scratch`, dropping the state copies it back into `v`. This is the regular end
/// of the sort, and it also restores a full permutation of the input into `v` when a comparison
/// panics halfway through a pass that writes into `v`.
struct MergeState<'a, T: Clone> {
    v: &'a mut [T],
    scratch: &'a mut [T],
    result_in_scratch: bool,
}

impl<T: Clone> Drop for MergeState<'_, T> {
    fn drop(&mut self) {
        if self.result_in_scratch {
            self.v.clone_from_slice(self.scratch);
        }
    }
}

/// Sorts `v` with merge passes of width `width`, `2 * width`, ... alternating between `v` and
/// `scratch`. The runs of length `width` start out in `scratch` if `result_in_scratch` is set.
///
/// `scratch.len()` must equal `v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(
    v: &mut [T],
    scratch: &mut [T],
    mut width: usize,
    result_in_scratch: bool,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(v.len(), scratch.len());

    let len = v.len();
    let mut state = MergeState {
        v,
        scratch,
        result_in_scratch,
    };

    while width < len {
        if state.result_in_scratch {
            merge_pass(&*state.scratch, &mut *state.v, width, is_less);
        } else {
            merge_pass(&*state.v, &mut *state.scratch, width, is_less);
        }
        state.result_in_scratch = !state.result_in_scratch;

        width <<= 1;
    }

    // Dropping `state` moves the result back into `v` if necessary.
}

/// The width 1 merge pass of `src`, appended to the empty `dst`.
///
/// A panicking comparison leaves `src` untouched.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_pairs_into<T, F>(src: &[T], dst: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(dst.is_empty());

    let mut pairs = src.chunks_exact(2);
    for pair in &mut pairs {
        if is_less(&pair[1], &pair[0]) {
            dst.push(pair[1].clone());
            dst.push(pair[0].clone());
        } else {
            dst.push(pair[0].clone());
            dst.push(pair[1].clone());
        }
    }
    dst.extend_from_slice(pairs.remainder());
}

/// Merges every pair of adjacent `width` sized runs of `src` into the same positions of `dst`.
/// The last pair may be shorter, or consist of a single run that is copied over.
fn merge_pass<T, F>(src: &[T], dst: &mut [T], width: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = src.len();

    let mut start = 0;
    while start < len {
        let mid = cmp::min(start + width, len);
        let end = cmp::min(mid + width, len);

        merge_runs(
            &src[start..mid],
            &src[mid..end],
            &mut dst[start..end],
            is_less,
        );

        start = end;
    }
}

/// Two-pointer merge of `left` and `right` into `dst`. On ties the element of `left` goes first,
/// which is what makes the sort stable.
#[inline]
fn merge_runs<T, F>(left: &[T], right: &[T], dst: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(left.len() + right.len(), dst.len());

    let mut l = 0;
    let mut r = 0;

    for out in dst.iter_mut() {
        let take_right = l == left.len() || (r < right.len() && is_less(&right[r], &left[l]));

        if take_right {
            out.clone_from(&right[r]);
            r += 1;
        } else {
            out.clone_from(&left[l]);
            l += 1;
        }
    }
}
