//! Elitism: carry the best-known candidate into the next generation.

use super::fitness::evaluate;
use crate::numeric::argmin;

/// Replaces the worst candidate of `population` with `elite`.
///
/// The worst slot is the first index of minimum fitness. `elite` is written
/// as-is and not re-evaluated. Every other slot is copied unchanged. An
/// empty population is returned empty.
pub fn apply_elitism(population: &[f64], elite: f64) -> Vec<f64> {
    let mut next = population.to_vec();
    if let Some(worst) = argmin(&evaluate(population)) {
        next[worst] = elite;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::fitness::fitness;

    #[test]
    fn test_replaces_only_worst_slot() {
        // fitness: 0.0, 7.9167 (x=7.98), -4.7946 (x=5.0), 0.8415 (x=1.0)
        let pop = vec![0.0, 7.98, 5.0, 1.0];
        let next = apply_elitism(&pop, 42.0);

        let changed: Vec<usize> = (0..pop.len())
            .filter(|&i| pop[i].to_bits() != next[i].to_bits())
            .collect();
        assert_eq!(changed, vec![2]);
        assert_eq!(next[2], 42.0);
    }

    #[test]
    fn test_ties_replace_first_minimum() {
        let pop = vec![5.0, 2.0, 5.0];
        assert!(fitness(5.0) < fitness(2.0));
        let next = apply_elitism(&pop, 7.0);
        assert_eq!(next, vec![7.0, 2.0, 5.0]);
    }

    #[test]
    fn test_input_not_modified() {
        let pop = vec![5.0, 10.0];
        let before = pop.clone();
        let _ = apply_elitism(&pop, 1.0);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_empty_population() {
        assert!(apply_elitism(&[], 1.0).is_empty());
    }
}
