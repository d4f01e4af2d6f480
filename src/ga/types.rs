//! Core data types of the evolutionary loop.
//!
//! A candidate is a plain `f64`; a population is a `Vec<f64>` whose order is
//! stable within a generation so fitness and parent indices line up.

/// Closed search interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Creates a new interval. Not validated; see [`GaConfig::validate`](super::GaConfig::validate).
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `x` into the interval.
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }

    /// Whether `x` lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Parent indices chosen for each offspring slot.
///
/// `first[i]` and `second[i]` are the two parents of offspring `i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentPairs {
    /// Index of parent 1 per slot; copied as-is when crossover is skipped.
    pub first: Vec<usize>,
    /// Index of parent 2 per slot; always differs from `first[i]`.
    pub second: Vec<usize>,
}

impl ParentPairs {
    /// Number of offspring slots.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Whether no slots were selected.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

/// Best candidate of one generation, taken before the population is replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Candidate that achieved it (first occurrence).
    pub best_value: f64,
}

/// Outcome of one evolution run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best candidate across all generations, rounded to 4 decimals.
    pub best_value: f64,
    /// Its fitness, rounded to 4 decimals.
    pub best_fitness: f64,
    /// Whether elitism was enabled for this run.
    pub elitism: bool,
    /// One record per generation, in order.
    pub history: Vec<GenerationRecord>,
}

impl RunResult {
    /// Running maximum of the per-generation best fitness.
    ///
    /// Non-decreasing by construction; the raw history may fluctuate.
    pub fn best_so_far(&self) -> Vec<f64> {
        let mut best = f64::NEG_INFINITY;
        self.history
            .iter()
            .map(|r| {
                best = best.max(r.best_fitness);
                best
            })
            .collect()
    }
}
