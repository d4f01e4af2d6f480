//! Real-valued Genetic Algorithm maximizing f(x) = x·sin(x).
//!
//! A candidate is a single `f64` in a closed interval. Each generation
//! evaluates the population, records its best candidate, selects parent
//! pairs by tournament, applies blend crossover and uniform mutation, and
//! optionally reinserts the previous best (elitism).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, bounds, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`RunResult`]: Best candidate across the run plus per-generation history
//!
//! # Submodules
//!
//! - [`fitness`]: fitness evaluation
//! - [`selection`]: tournament selection and parent pairing
//! - [`operators`]: blend crossover and uniform mutation
//! - [`elitism`]: worst-slot replacement by the elite
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (elitist strategy)

mod config;
pub mod elitism;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaRunner, GenerationObserver, NoopObserver};
pub use types::{Bounds, GenerationRecord, ParentPairs, RunResult};
