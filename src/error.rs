//! Configuration errors.
//!
//! The numeric core is total over the bounded domain, so the only failures
//! are parameter combinations the loop cannot run with.

/// An invalid GA or experiment parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("initial population has {actual} candidates, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },
    #[error("num_generations must be at least 1")]
    NoGenerations,
    #[error("num_runs must be at least 1")]
    NoRuns,
    #[error("invalid bounds: value_min={min}, value_max={max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("mutation_scale must be finite and non-negative, got {0}")]
    InvalidMutationScale(f64),
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// Failure while running or reporting an experiment.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("InvalidSeed: {value:?} is not a u64 ({source})")]
    InvalidSeed {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("ReportError: {0}")]
    Report(#[from] std::io::Error),
}
