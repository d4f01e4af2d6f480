//! Real-valued genetic operators.
//!
//! Both operators return a fresh population and clamp every produced value
//! into the search [`Bounds`], so the domain invariant holds after each step.
//!
//! # Crossover
//!
//! - [`crossover`]: blend (arithmetic) crossover, one offspring per slot
//!
//! # Mutation
//!
//! - [`mutate`]: uniform perturbation in `[-σ, σ]`
//!
//! # References
//!
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution Programs*
//! - Eshelman & Schaffer (1993), "Real-Coded Genetic Algorithms and
//!   Interval-Schemata"

use super::types::{Bounds, ParentPairs};
use rand::Rng;

/// Blend crossover over selected parent pairs.
///
/// For each slot `i`, with probability `pc` the child is
/// `clamp(α·p1 + (1−α)·p2)` with `α ~ U[0, 1)`. Otherwise the child is a
/// copy of parent 1; parent 2 is never copied on its own.
///
/// # Panics
/// Panics if a parent index is out of range for `population`.
pub fn crossover<R: Rng>(
    population: &[f64],
    parents: &ParentPairs,
    pc: f64,
    bounds: Bounds,
    rng: &mut R,
) -> Vec<f64> {
    parents
        .first
        .iter()
        .zip(&parents.second)
        .map(|(&i1, &i2)| {
            let p1 = population[i1];
            let p2 = population[i2];
            if rng.random::<f64>() < pc {
                let alpha: f64 = rng.random();
                bounds.clamp(alpha * p1 + (1.0 - alpha) * p2)
            } else {
                p1
            }
        })
        .collect()
}

/// Uniform mutation with amplitude `sigma`.
///
/// Each value is perturbed with probability `pm` by `δ ~ U[−σ, σ)` and
/// clamped; the rest pass through unchanged.
pub fn mutate<R: Rng>(population: &[f64], pm: f64, sigma: f64, bounds: Bounds, rng: &mut R) -> Vec<f64> {
    population
        .iter()
        .map(|&x| {
            if rng.random::<f64>() < pm {
                let delta = crate::random::uniform(rng, -sigma, sigma);
                bounds.clamp(x + delta)
            } else {
                x
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn pairs(first: &[usize], second: &[usize]) -> ParentPairs {
        ParentPairs {
            first: first.to_vec(),
            second: second.to_vec(),
        }
    }

    #[test]
    fn test_crossover_pc_zero_copies_parent1() {
        let pop = vec![10.0, 20.0, 30.0];
        let parents = pairs(&[2, 0, 1], &[0, 1, 2]);
        let mut rng = create_rng(42);
        let children = crossover(&pop, &parents, 0.0, Bounds::default(), &mut rng);
        assert_eq!(children, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn test_crossover_pc_one_blends_between_parents() {
        let pop = vec![10.0, 20.0];
        let parents = pairs(&[0, 1, 0, 1], &[1, 0, 1, 0]);
        let mut rng = create_rng(7);
        let children = crossover(&pop, &parents, 1.0, Bounds::default(), &mut rng);
        assert_eq!(children.len(), 4);
        for c in children {
            assert!((10.0..=20.0).contains(&c), "child {c} outside parent span");
        }
    }

    #[test]
    fn test_crossover_leaves_input_untouched() {
        let pop = vec![1.0, 99.0];
        let before = pop.clone();
        let mut rng = create_rng(3);
        let _ = crossover(&pop, &pairs(&[0, 1], &[1, 0]), 0.8, Bounds::default(), &mut rng);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_mutate_pm_zero_is_identity() {
        let pop = vec![0.0, 50.0, 100.0];
        let mut rng = create_rng(42);
        assert_eq!(mutate(&pop, 0.0, 5.0, Bounds::default(), &mut rng), pop);
    }

    #[test]
    fn test_mutate_pm_one_moves_within_sigma() {
        let pop = vec![50.0; 200];
        let mut rng = create_rng(11);
        let mutated = mutate(&pop, 1.0, 5.0, Bounds::default(), &mut rng);
        let mut changed = 0;
        for (&before, &after) in pop.iter().zip(&mutated) {
            assert!((after - before).abs() <= 5.0);
            if after != before {
                changed += 1;
            }
        }
        assert!(changed > 190);
    }

    #[test]
    fn test_mutate_clamps_at_edges() {
        let pop = vec![0.0, 100.0, 0.0, 100.0];
        let mut rng = create_rng(5);
        for _ in 0..50 {
            let mutated = mutate(&pop, 1.0, 5.0, Bounds::default(), &mut rng);
            assert!(mutated.iter().all(|&x| (0.0..=100.0).contains(&x)));
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_stays_in_bounds(
            pop in prop::collection::vec(0.0f64..=100.0, 2..30),
            pc in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let n = pop.len();
            let first: Vec<usize> = (0..n).collect();
            let second: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
            let mut rng = create_rng(seed);
            let children = crossover(&pop, &pairs(&first, &second), pc, Bounds::default(), &mut rng);
            prop_assert_eq!(children.len(), n);
            for c in children {
                prop_assert!(Bounds::default().contains(c));
            }
        }

        #[test]
        fn prop_mutation_stays_in_bounds(
            pop in prop::collection::vec(-5.0f64..=5.0, 1..30),
            pm in 0.0f64..=1.0,
            sigma in 0.0f64..20.0,
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::new(-5.0, 5.0);
            let mut rng = create_rng(seed);
            let mutated = mutate(&pop, pm, sigma, bounds, &mut rng);
            prop_assert_eq!(mutated.len(), pop.len());
            for x in mutated {
                prop_assert!(bounds.contains(x));
            }
        }
    }
}
