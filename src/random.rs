//! Seeded RNG construction and permutation helpers.
//!
//! All algorithms in this crate draw randomness through an explicitly
//! constructed [`StdRng`] rather than a process-global generator, so a
//! `(scenario, seed)` pair fully determines a run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles a slice in place (Fisher–Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a uniformly random permutation of `0..n`.
pub fn permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}
