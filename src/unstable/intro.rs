//! Introsort without recursion.
//!
//! Quicksort with median-of-three pivots and Hoare partitioning, driven by an explicit stack of
//! pending ranges. Ranges of up to [`SMALL_RANGE_THRESHOLD`] elements are left alone and finished
//! by one insertion sort pass over the whole slice at the end. A range that runs out of depth
//! budget is handed to comb sort as a whole.
//!
//! Not stable. Allocates the partition stack, *O*(log(*n*)) frames.

use crate::stable::insertion::insertion_sort;
use crate::unstable::comb::comb_sort;
use crate::{Result, SortError};

/// Ranges of at most this many elements are not partitioned any further.
pub const SMALL_RANGE_THRESHOLD: usize = 16;

// The depth budget is never computed from less than 2^2 elements.
const MIN_DEPTH_EXP: u32 = 2;

#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<()>
where
    T: Ord,
{
    sort_by(v, |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if crate::is_zst::<T>() {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return Ok(());
    }

    let len = v.len();
    if len <= SMALL_RANGE_THRESHOLD {
        insertion_sort(v, &mut is_less);
        return Ok(());
    }

    introsort(v, depth_budget(len), &mut is_less)
}

/// A pending range `left..=right` of the slice together with its remaining depth budget.
#[derive(Clone, Copy, Debug)]
struct Frame {
    left: usize,
    right: usize,
    depth_budget: u32,
}

/// `2 * ceil(log2(len))`, computed from at least `2^MIN_DEPTH_EXP`.
fn depth_budget(len: usize) -> u32 {
    2 * ceil_log2(len).max(MIN_DEPTH_EXP)
}

fn ceil_log2(len: usize) -> u32 {
    if len < 2 {
        0
    } else {
        usize::BITS - (len - 1).leading_zeros()
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn introsort<T, F>(v: &mut [T], depth_budget: u32, is_less: &mut F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // Only the larger side of a partition is pushed, the smaller one is processed right away. The
    // range being processed at least halves with every push, which bounds the stack by log2(len).
    let stack_cap = ceil_log2(len) as usize + 2;
    let mut stack: Vec<Frame> = Vec::new();
    stack
        .try_reserve_exact(stack_cap)
        .map_err(|err| SortError::alloc_failed("introsort partition stack", stack_cap, err))?;

    log::trace!("introsort of {len} elements, depth budget {depth_budget}, stack capacity {stack_cap}");

    stack.push(Frame {
        left: 0,
        right: len - 1,
        depth_budget,
    });

    while let Some(frame) = stack.pop() {
        let Frame {
            mut left,
            mut right,
            mut depth_budget,
        } = frame;

        loop {
            let range_len = right - left + 1;
            if range_len <= SMALL_RANGE_THRESHOLD {
                // Left for the final insertion sort pass.
                break;
            }

            if depth_budget == 0 {
                log::debug!("depth budget exhausted for range {left}..={right}, using comb sort");
                comb_sort(&mut v[left..=right], is_less);
                break;
            }
            depth_budget -= 1;

            let pivot = left + partition(&mut v[left..=right], is_less);

            let left_len = pivot - left;
            let right_len = right - pivot;

            if left_len > right_len {
                if left_len > SMALL_RANGE_THRESHOLD {
                    push_frame(
                        &mut stack,
                        Frame {
                            left,
                            right: pivot - 1,
                            depth_budget,
                        },
                        v,
                        is_less,
                    );
                }

                if right_len > SMALL_RANGE_THRESHOLD {
                    left = pivot + 1;
                } else {
                    break;
                }
            } else {
                if right_len > SMALL_RANGE_THRESHOLD {
                    push_frame(
                        &mut stack,
                        Frame {
                            left: pivot + 1,
                            right,
                            depth_budget,
                        },
                        v,
                        is_less,
                    );
                }

                if left_len > SMALL_RANGE_THRESHOLD {
                    right = pivot - 1;
                } else {
                    break;
                }
            }
        }
    }

    // Every element now sits in a range of its final position that is either sorted or short.
    insertion_sort(v, is_less);

    Ok(())
}

/// Pushes `frame` if the reserved capacity allows it, otherwise sorts its range right away. The
/// stack never grows after the allocation at entry.
#[inline]
fn push_frame<T, F>(stack: &mut Vec<Frame>, frame: Frame, v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if stack.len() < stack.capacity() {
        stack.push(frame);
    } else {
        log::debug!(
            "partition stack full, using comb sort for range {}..={}",
            frame.left,
            frame.right
        );
        comb_sort(&mut v[frame.left..=frame.right], is_less);
    }
}

/// Partitions `v` around the median of its first, middle and last element and returns the final
/// position of that pivot. Everything left of it compares less or equal, everything right of it
/// greater or equal.
///
/// `v.len()` must be at least 3.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 3);

    let last = len - 1;
    let mid = len / 2;

    // Afterwards `v[0] <= v[mid] <= v[last]`, both ends act as sentinels for the scans below.
    sort3(v, 0, mid, last, is_less);

    let pivot = last - 1;
    v.swap(mid, pivot);

    let mut i = 0;
    let mut j = pivot;
    loop {
        // The bounds checks only matter if `is_less` is not a strict weak order.
        loop {
            i += 1;
            if i >= pivot || !is_less(&v[i], &v[pivot]) {
                break;
            }
        }

        loop {
            j -= 1;
            if j <= i || !is_less(&v[pivot], &v[j]) {
                break;
            }
        }

        if j <= i {
            break;
        }

        v.swap(i, j);
    }

    v.swap(i, pivot);

    i
}

/// Orders `v[a]`, `v[b]` and `v[c]` with at most three comparisons, leaving the median in `v[b]`.
#[inline]
fn sort3<T, F>(v: &mut [T], a: usize, b: usize, c: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[b], &v[a]) {
        v.swap(a, b);
    }

    if is_less(&v[c], &v[b]) {
        v.swap(b, c);

        if is_less(&v[b], &v[a]) {
            v.swap(a, b);
        }
    }
}
