//! Binary heap sort. *O*(*n* \* log(*n*)) worst-case, not stable, does not allocate.
//!
//! The two phases are exposed separately as well: [`heapify`] turns a slice into a max-heap and
//! [`sort_heap`] sorts a slice that already is one.

use crate::Result;

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

    build_heap(v, &mut is_less);
    pop_heap_all(v, &mut is_less);

    Ok(())
}

/// Reorders `v` into a max-heap: for every node `i`, neither `v[2i + 1]` nor `v[2i + 2]` compares
/// greater than `v[i]`.
pub fn heapify<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(v, &mut is_less);
}

/// Sorts `v`, which must already be a max-heap under `is_less`, see [`heapify`].
///
/// If `v` is not a heap the result is a permutation of `v` in unspecified order.
pub fn sort_heap<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    pop_heap_all(v, &mut is_less);
}

/// Sifts down every internal node, starting at the last one, in linear time.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn build_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}

/// Repeatedly swaps the maximum to the end of the shrinking heap.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn pop_heap_all<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child, the right one if the left is less.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
