//! Fitness evaluation: f(x) = x·sin(x), rounded to 4 decimals.

use crate::numeric::round_to;

/// Decimal places kept in every fitness value.
pub const FITNESS_DIGITS: u32 = 4;

/// Fitness of a single candidate. Higher is better.
pub fn fitness(x: f64) -> f64 {
    round_to(x * x.sin(), FITNESS_DIGITS)
}

/// Fitness vector parallel to `population`.
pub fn evaluate(population: &[f64]) -> Vec<f64> {
    population.iter().map(|&x| fitness(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_at_zero() {
        assert_eq!(fitness(0.0), 0.0);
    }

    #[test]
    fn test_fitness_at_upper_bound() {
        // 100·sin(100) = -50.6365641...
        assert_eq!(fitness(100.0), -50.6366);
        assert_eq!(fitness(100.0), round_to(100.0 * 100f64.sin(), 4));
    }

    #[test]
    fn test_evaluate_is_parallel_and_deterministic() {
        let pop = vec![0.0, 1.5, 7.9787, 100.0];
        let a = evaluate(&pop);
        let b = evaluate(&pop);
        assert_eq!(a.len(), pop.len());
        assert_eq!(a, b);
        for (x, f) in pop.iter().zip(&a) {
            assert_eq!(*f, fitness(*x));
        }
    }

    #[test]
    fn test_evaluate_empty() {
        assert!(evaluate(&[]).is_empty());
    }
}
