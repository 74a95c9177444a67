//! Order statistics by repeated Hoare partitioning, also known as quickselect.
//!
//! Finds the element that would sit at index `k` of the sorted slice without sorting the whole
//! slice. Afterwards nothing left of `k` compares greater than `v[k]` and nothing right of it
//! compares less, beyond that the order is unspecified.

use std::cmp::Ordering;

use crate::{Result, SortError};

#[inline]
pub fn select_kth<T>(v: &mut [T], k: usize) -> Result<&T>
where
    T: Ord,
{
    select_kth_by(v, k, |a, b| a.lt(b))
}

/// Reorders `v` so that `v[k]` is the element that would be at that position if `v` was sorted by
/// `is_less`, and returns it.
///
/// Fails with [`SortError::EmptyInput`] for an empty slice and with
/// [`SortError::IndexOutOfRange`] if `k >= v.len()`, leaving `v` untouched in both cases.
pub fn select_kth_by<T, F>(v: &mut [T], k: usize, mut is_less: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return Err(SortError::EmptyInput);
    }

    if k >= len {
        return Err(SortError::IndexOutOfRange { index: k, len });
    }

    if !crate::is_zst::<T>() {
        quickselect(v, k, &mut is_less);
    }

    Ok(&v[k])
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quickselect<T, F>(v: &mut [T], k: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = v.len() - 1;

    loop {
        if high <= low {
            return;
        }

        if high == low + 1 {
            if is_less(&v[high], &v[low]) {
                v.swap(low, high);
            }
            return;
        }

        let (ll, hh) = partition(v, low, high, is_less);

        match k.cmp(&hh) {
            Ordering::Less => high = hh - 1,
            Ordering::Equal => return,
            // Whatever lies strictly between the two scan positions is equal to the pivot.
            Ordering::Greater if k < ll => return,
            Ordering::Greater => low = ll,
        }
    }
}

/// Partitions `v[low..=high]` around the median of its first, middle and last element, which ends
/// up at the returned `hh`. `v[low..hh]` compares less or equal to it, `v[ll..=high]` greater or
/// equal.
///
/// The range must hold at least 3 elements.
fn partition<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(high >= low + 2);

    let mid = low + (high - low) / 2;

    // Leaves `v[mid] <= v[low] <= v[high]`, the median is the pivot at `low`.
    if is_less(&v[high], &v[mid]) {
        v.swap(high, mid);
    }
    if is_less(&v[high], &v[low]) {
        v.swap(high, low);
    }
    if is_less(&v[low], &v[mid]) {
        v.swap(mid, low);
    }

    // `v[low + 1]` and `v[high]` bound the scans below.
    v.swap(mid, low + 1);

    let mut ll = low + 1;
    let mut hh = high;
    loop {
        loop {
            ll += 1;
            if ll >= high || !is_less(&v[ll], &v[low]) {
                break;
            }
        }

        loop {
            hh -= 1;
            if hh <= low + 1 || !is_less(&v[low], &v[hh]) {
                break;
            }
        }

        if hh < ll {
            break;
        }

        v.swap(ll, hh);
    }

    v.swap(low, hh);

    (ll, hh)
}
