//! Evolutionary maximization of f(x) = x·sin(x) with and without elitism.
//!
//! - **Genetic Algorithm** ([`ga`]): tournament selection, blend crossover,
//!   uniform mutation, and an optional elitism step over a population of
//!   bounded real values.
//! - **Experiment** ([`experiment`]): repeated runs per policy, group means,
//!   and a textual comparison report.
//!
//! Every operator takes an explicit `rand::Rng`, so seeded runs are
//! reproducible.

pub mod error;
pub mod experiment;
pub mod ga;
pub mod numeric;
pub mod random;

pub use error::{ConfigError, ExperimentError};
