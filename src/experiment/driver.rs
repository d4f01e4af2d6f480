//! Repeated runs with and without elitism, and their aggregate.

use super::config::ExperimentConfig;
use super::report::{self, ProgressPrinter};
use crate::error::ExperimentError;
use crate::ga::{GaRunner, RunResult};
use crate::numeric::{mean, round_to};
use log::info;
use std::fmt;
use std::io::Write;

/// Which policy produced the higher mean fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    ElitismBetter,
    /// Also reported when the means are equal.
    NoElitismBetter,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::ElitismBetter => write!(f, "Elitism better"),
            Verdict::NoElitismBetter => write!(f, "No elitism better"),
        }
    }
}

/// Results of one policy group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    pub elitism: bool,
    pub runs: Vec<RunResult>,
}

impl GroupSummary {
    /// Arithmetic mean of the runs' best fitness (unrounded).
    pub fn mean_fitness(&self) -> f64 {
        let fitness: Vec<f64> = self.runs.iter().map(|r| r.best_fitness).collect();
        mean(&fitness)
    }
}

/// Outcome of the whole comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    pub with_elitism: GroupSummary,
    pub without_elitism: GroupSummary,
}

impl ExperimentSummary {
    /// `mean(with) − mean(without)`, rounded to 4 decimals.
    pub fn difference(&self) -> f64 {
        round_to(
            self.with_elitism.mean_fitness() - self.without_elitism.mean_fitness(),
            4,
        )
    }

    /// Elitism wins only with a strictly greater mean.
    pub fn verdict(&self) -> Verdict {
        verdict(
            self.with_elitism.mean_fitness(),
            self.without_elitism.mean_fitness(),
        )
    }
}

fn verdict(mean_with: f64, mean_without: f64) -> Verdict {
    if mean_with > mean_without {
        Verdict::ElitismBetter
    } else {
        Verdict::NoElitismBetter
    }
}

/// Runs the elitism comparison.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs both groups, writing progress and the summary to `out`.
    ///
    /// ```
    /// use elitism_ga::experiment::{ExperimentConfig, ExperimentRunner};
    ///
    /// let config = ExperimentConfig::default().with_num_runs(2).with_seed(3);
    /// let mut out = Vec::<u8>::new();
    /// let summary = ExperimentRunner::run(&config, &mut out).unwrap();
    /// assert_eq!(summary.with_elitism.runs.len(), 2);
    /// ```
    pub fn run<W: Write>(
        config: &ExperimentConfig,
        out: &mut W,
    ) -> Result<ExperimentSummary, ExperimentError> {
        config.validate()?;
        report::write_title(out)?;

        let with_elitism = Self::run_group(config, true, out)?;
        let without_elitism = Self::run_group(config, false, out)?;
        let summary = ExperimentSummary {
            with_elitism,
            without_elitism,
        };

        report::write_summary(out, &summary)?;
        info!(
            "experiment finished: difference={} verdict={}",
            summary.difference(),
            summary.verdict()
        );
        Ok(summary)
    }

    fn run_group<W: Write>(
        config: &ExperimentConfig,
        elitism: bool,
        out: &mut W,
    ) -> Result<GroupSummary, ExperimentError> {
        let mut runs = Vec::with_capacity(config.num_runs);
        for i in 0..config.num_runs {
            report::write_run_header(out, elitism, i)?;
            report::write_evolution_banner(out, elitism)?;
            let run_config = config.run_config(elitism, i);
            let mut printer = ProgressPrinter::new(out);
            let result = GaRunner::run_with_observer(&run_config, &mut printer)?;
            printer.finish()?;
            info!(
                "run {} (elitism={}): x={} f(x)={}",
                i + 1,
                elitism,
                result.best_value,
                result.best_fitness
            );
            runs.push(result);
        }
        Ok(GroupSummary { elitism, runs })
    }
}
