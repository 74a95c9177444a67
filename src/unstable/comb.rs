//! Comb sort, an exchange sort over a shrinking gap.
//!
//! Not stable and does not allocate. It also serves as the fallback of introsort once a range
//! used up its depth budget.

use crate::stable::insertion::insertion_sort;
use crate::Result;

/// Divisor applied to the gap after every pass, `1 / (1 - e^-phi)`.
const SHRINK_FACTOR: f64 = 1.247_330_950_103_978_7;

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

    comb_sort(v, &mut is_less);

    Ok(())
}

/// Sorts `v` by comparing and swapping elements `gap` apart, shrinking `gap` after every pass.
///
/// The gap stops shrinking at 2, passes continue until one of them performs no swap. A gap of 2
/// does not guarantee order, so unless the final gap was 1 an insertion sort pass finishes the
/// job. That pass is cheap, every remaining inversion is between neighbors.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn comb_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut gap = len;
    let mut final_gap_passes = 0;

    loop {
        gap = next_gap(gap);

        let mut swapped = false;
        for i in 0..len - gap {
            if is_less(&v[i + gap], &v[i]) {
                v.swap(i, i + gap);
                swapped = true;
            }
        }

        if gap <= 2 {
            // A strict weak order settles within `len / 2` passes at gap 2, a predicate that is
            // not one may keep swapping forever.
            final_gap_passes += 1;
            if !swapped || final_gap_passes >= len {
                break;
            }
        }
    }

    if gap != 1 {
        insertion_sort(v, is_less);
    }
}

#[inline]
fn next_gap(gap: usize) -> usize {
    if gap <= 2 {
        return gap;
    }

    let next = (gap as f64 / SHRINK_FACTOR) as usize;

    // Gaps of 9 and 10 lead into a sequence that leaves turtles behind, 11 does not.
    if next == 9 || next == 10 {
        11
    } else {
        next
    }
}
