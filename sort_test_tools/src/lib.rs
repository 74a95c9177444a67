//! Shared test and benchmark support for the sorting and selection algorithms.
//!
//! Implement [`Sort`] or [`Select`] for a marker type and expand [`instantiate_sort_tests!`] or
//! [`instantiate_select_tests!`] with it to get the full test suite.

/// A sort under test. Comparisons are strict-weak-order `is_less` predicates.
pub trait Sort {
    fn name() -> String;

    /// Inputs longer than this are skipped, quadratic sorts would take too long otherwise.
    fn max_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

/// An order statistic selection under test.
///
/// Returns `None` for an empty slice or `k >= arr.len()`.
pub trait Select {
    fn name() -> String;

    fn select_kth<T>(arr: &mut [T], k: usize) -> Option<&T>
    where
        T: Ord;

    fn select_kth_by<T, F>(arr: &mut [T], k: usize, is_less: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;
