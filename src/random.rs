//! Random number generation.
//!
//! Every operator takes `&mut R: Rng` explicitly; this module only builds
//! the generator a run starts from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives the seed of run `run_index` from a base seed.
///
/// SplitMix64 finalizer, so neighbouring runs get unrelated streams.
pub fn derive_seed(base: u64, run_index: u64) -> u64 {
    let mut z = base.wrapping_add(run_index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform sample in `[lo, hi)`. Returns `lo` when the range is empty.
pub fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..hi)
}
