//! Input generation and ordering checks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build a random sequence of `count` values in `0..=max`.
///
/// A fixed `seed` reproduces the same sequence; `None` seeds from the OS.
pub fn random_sequence(count: usize, max: u32, seed: Option<u64>) -> Vec<u32> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| rng.gen_range(0..=max)).collect()
}

/// Shuffle `seq` in place.
pub fn shuffle(seq: &mut [u32], seed: Option<u64>) {
    let mut rng = seeded_rng(seed);
    seq.shuffle(&mut rng);
}

/// Whether `seq` is in non-decreasing order.
pub fn is_sorted(seq: &[u32]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
