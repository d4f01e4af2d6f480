//! Experiment configuration.

use crate::error::ConfigError;
use crate::ga::GaConfig;
use crate::random::derive_seed;

/// Configuration for the elitism comparison.
///
/// Each group (with and without elitism) runs `num_runs` times using `ga`
/// with only the `elitism` flag and seed changed.
///
/// ```
/// use elitism_ga::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default().with_num_runs(10).with_seed(1);
/// assert_eq!(config.num_runs, 10);
/// assert_eq!(config.ga.population_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Parameters shared by every run.
    pub ga: GaConfig,

    /// Runs per group.
    pub num_runs: usize,

    /// Base seed. Each run derives its own seed from it; `None` seeds every
    /// run from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            num_runs: 4,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the per-run GA parameters.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Sets the number of runs per group.
    pub fn with_num_runs(mut self, n: usize) -> Self {
        self.num_runs = n;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// GA configuration for run `run_index` (zero-based) of one group.
    pub fn run_config(&self, elitism: bool, run_index: usize) -> GaConfig {
        let offset = if elitism { 0 } else { self.num_runs };
        GaConfig {
            elitism,
            seed: self
                .seed
                .map(|base| derive_seed(base, (offset + run_index) as u64)),
            ..self.ga.clone()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        self.ga.validate()
    }
}
