//! Elitism comparison experiment.
//!
//! Runs the GA `num_runs` times with elitism, then `num_runs` times
//! without, and reports per-run results, group means, their difference and
//! a verdict.
//!
//! # Key Types
//!
//! - [`ExperimentConfig`]: runs per group, base seed, shared GA parameters
//! - [`ExperimentRunner`]: executes both groups and writes the report
//! - [`ExperimentSummary`]: aggregated outcome

mod config;
mod driver;
pub mod report;

pub use config::ExperimentConfig;
pub use driver::{ExperimentRunner, ExperimentSummary, GroupSummary, Verdict};
