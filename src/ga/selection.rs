//! Tournament selection for the GA.
//!
//! Fitness is **maximized** here: the tournament winner is the draw with the
//! highest fitness.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::ParentPairs;
use crate::error::ConfigError;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: draw `k` distinct indices, return the fittest.
///
/// Draws are taken without replacement; `k` is clamped to `[1, n]`, so
/// `k >= n` always returns the global best. Ties keep the earliest draw.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    draw_tournament(fitness, k, rng).0
}

/// Runs one tournament and also returns the drawn indices, in draw order.
fn draw_tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> (usize, Vec<usize>) {
    let n = fitness.len();
    assert!(n > 0, "cannot select from empty population");
    let k = k.clamp(1, n);

    let draws = index::sample(rng, n, k).into_vec();
    let mut winner = draws[0];
    for &idx in &draws[1..] {
        if fitness[idx] > fitness[winner] {
            winner = idx;
        }
    }
    (winner, draws)
}

/// Chooses two distinct parents for each of the `n` offspring slots.
///
/// The second parent is redrawn until it differs from the first. When
/// `k >= n` every full tournament returns the same global best, so the
/// redraw uses `n - 1` distinct draws instead, which can still exclude it.
///
/// Returns [`ConfigError::PopulationTooSmall`] for fewer than two
/// candidates, where no distinct pair exists.
pub fn select_parents<R: Rng>(
    fitness: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<ParentPairs, ConfigError> {
    let n = fitness.len();
    if n < 2 {
        return Err(ConfigError::PopulationTooSmall(n));
    }
    let redraw_k = k.min(n - 1);

    let mut pairs = ParentPairs {
        first: Vec::with_capacity(n),
        second: Vec::with_capacity(n),
    };
    for _ in 0..n {
        let p1 = tournament(fitness, k, rng);
        let mut p2 = tournament(fitness, k, rng);
        while p2 == p1 {
            p2 = tournament(fitness, redraw_k, rng);
        }
        pairs.first.push(p1);
        pairs.second.push(p2);
    }
    Ok(pairs)
}
