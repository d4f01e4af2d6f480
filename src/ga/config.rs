//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of one evolution run. Defaults are the
//! experiment's fixed constants; `with_*` setters override them.

use super::types::Bounds;
use crate::error::ConfigError;

/// Configuration for one run of the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use elitism_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.num_generations, 50);
/// assert_eq!(config.tournament_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use elitism_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_bounds(0.0, 50.0)
///     .with_elitism(true)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates in the population.
    pub population_size: usize,

    /// Search interval. Every candidate stays inside it.
    pub bounds: Bounds,

    /// Number of generations per run.
    pub num_generations: usize,

    /// Tournament size `k` used for parent selection.
    ///
    /// Values below 1 are treated as 1. `k >= population_size` always
    /// selects the global best.
    pub tournament_size: usize,

    /// Probability of blend crossover per offspring slot (0.0–1.0).
    ///
    /// When crossover is not applied, the offspring is a copy of parent 1.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the interval width used as mutation amplitude σ.
    pub mutation_scale: f64,

    /// Whether the best candidate of each generation is reinserted
    /// into the next one.
    pub elitism: bool,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            bounds: Bounds::default(),
            num_generations: 50,
            tournament_size: 2,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            mutation_scale: 0.05,
            elitism: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the search interval.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation amplitude as a fraction of the interval width.
    pub fn with_mutation_scale(mut self, scale: f64) -> Self {
        self.mutation_scale = scale.max(0.0);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mutation amplitude σ = `mutation_scale · (max − min)`.
    pub fn sigma(&self) -> f64 {
        self.mutation_scale * self.bounds.span()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.num_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        let Bounds { min, max } = self.bounds;
        if !min.is_finite()
            || !max.is_finite()
            || min >= max
            || !self.bounds.span().is_finite()
        {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        // Mutation draws from [-σ, σ), whose width must stay finite.
        if !self.mutation_scale.is_finite()
            || self.mutation_scale < 0.0
            || !(2.0 * self.sigma()).is_finite()
        {
            return Err(ConfigError::InvalidMutationScale(self.mutation_scale));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
