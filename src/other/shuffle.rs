//! Knuth shuffle, in-place uniform random permutation.

use rand::Rng;

/// Shuffles `v` in place: for every `i` from the back, swaps `v[i]` with a uniformly chosen
/// `v[j]`, `j <= i`. The outcome only depends on `rng`, seeded generators reproduce it.
pub fn shuffle<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..v.len()).rev() {
        let j = rng.gen_range(0..=i);
        v.swap(i, j);
    }
}
