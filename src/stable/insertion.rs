//! Insertion sort, stable and in-place. *O*(*n*^2) in general, *O*(*n*) on presorted input.
//!
//! Used on its own for short slices and as the finishing pass of comb sort and introsort.

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

    insertion_sort(v, &mut is_less);

    Ok(())
}

/// Walks every element starting at index 1 leftward, swapping it with its left neighbor as long
/// as the neighbor is greater. Stops at the first non-inversion, so equal elements never pass
/// each other.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
