use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{stable, unstable, Result};

/// Runtime selection of one of the sorts, for code that iterates over the whole family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Comb,
    Heap,
    Merge,
    Intro,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Comb,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Intro,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Comb => "comb",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Intro => "intro",
        }
    }

    /// Only merge sort and insertion sort keep equal elements in their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    #[inline]
    pub fn sort<T>(self, v: &mut [T]) -> Result<()>
    where
        T: Ord + Clone,
    {
        self.sort_by(v, |a, b| a.lt(b))
    }

    pub fn sort_by<T, F>(self, v: &mut [T], is_less: F) -> Result<()>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::Insertion => stable::insertion::sort_by(v, is_less),
            Algorithm::Comb => unstable::comb::sort_by(v, is_less),
            Algorithm::Heap => unstable::heap::sort_by(v, is_less),
            Algorithm::Merge => stable::merge::sort_by(v, is_less),
            Algorithm::Intro => unstable::intro::sort_by(v, is_less),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm '{0}', expected one of insertion, comb, heap, merge, intro")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
