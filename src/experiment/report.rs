//! Console report of an experiment.
//!
//! All functions write to any [`Write`] so tests can capture the text.

use super::driver::{ExperimentSummary, GroupSummary};
use crate::ga::{GenerationObserver, GenerationRecord};
use crate::numeric::round_to;
use std::io::{self, Write};

/// Whether generation `generation` (zero-based) gets a progress line.
pub fn should_report(generation: usize) -> bool {
    generation == 0 || (generation + 1) % 10 == 0
}

/// Experiment title line.
pub fn write_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "EXPERIMENT: WITH VS WITHOUT ELITISM")
}

/// Header printed before run `run_index` (zero-based).
pub fn write_run_header<W: Write>(out: &mut W, elitism: bool, run_index: usize) -> io::Result<()> {
    let policy = if elitism { "WITH" } else { "WITHOUT" };
    writeln!(out, "\n>>> RUN {} {} ELITISM <<<", run_index + 1, policy)
}

/// Banner opening the generation log of one run.
pub fn write_evolution_banner<W: Write>(out: &mut W, elitism: bool) -> io::Result<()> {
    let policy = if elitism { "WITH" } else { "WITHOUT" };
    writeln!(out, "\nEvolution {policy} elitism")
}

/// One progress line: `Generation 010: fitness = 7.9167`.
pub fn write_generation<W: Write>(out: &mut W, record: &GenerationRecord) -> io::Result<()> {
    writeln!(
        out,
        "Generation {:03}: fitness = {}",
        record.generation + 1,
        round_to(record.best_fitness, 4)
    )
}

/// Final tables, means, difference and verdict.
pub fn write_summary<W: Write>(out: &mut W, summary: &ExperimentSummary) -> io::Result<()> {
    writeln!(out, "\nFINAL RESULTS")?;
    write_group(out, "WITH ELITISM", &summary.with_elitism)?;
    write_group(out, "WITHOUT ELITISM", &summary.without_elitism)?;
    writeln!(
        out,
        "DIFFERENCE: {} ({})",
        summary.difference(),
        summary.verdict()
    )
}

fn write_group<W: Write>(out: &mut W, title: &str, group: &GroupSummary) -> io::Result<()> {
    writeln!(out, "\n{title}:")?;
    for (i, run) in group.runs.iter().enumerate() {
        writeln!(
            out,
            "  Run {}: x = {:<8} | f(x) = {}",
            i + 1,
            run.best_value,
            run.best_fitness
        )?;
    }
    writeln!(out, "Mean: {}", round_to(group.mean_fitness(), 4))
}

/// Observer that prints progress lines for the reported generations.
///
/// Write errors are kept and surfaced by [`ProgressPrinter::finish`].
pub struct ProgressPrinter<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> ProgressPrinter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> GenerationObserver for ProgressPrinter<'_, W> {
    fn on_generation(&mut self, record: &GenerationRecord) {
        if self.error.is_some() || !should_report(record.generation) {
            return;
        }
        if let Err(e) = write_generation(&mut *self.out, record) {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(generation: usize, best_fitness: f64) -> GenerationRecord {
        GenerationRecord {
            generation,
            best_fitness,
            best_value: 0.0,
        }
    }

    #[test]
    fn test_should_report() {
        let reported: Vec<usize> = (0..50).filter(|&g| should_report(g)).collect();
        assert_eq!(reported, vec![0, 9, 19, 29, 39, 49]);
    }

    #[test]
    fn test_generation_line_format() {
        let mut out = Vec::new();
        write_generation(&mut out, &record(9, 7.91672)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Generation 010: fitness = 7.9167\n");
    }

    #[test]
    fn test_run_header() {
        let mut out = Vec::new();
        write_run_header(&mut out, true, 0).unwrap();
        write_run_header(&mut out, false, 3).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n>>> RUN 1 WITH ELITISM <<<\n\n>>> RUN 4 WITHOUT ELITISM <<<\n"
        );
    }

    #[test]
    fn test_evolution_banner() {
        let mut out = Vec::new();
        write_evolution_banner(&mut out, true).unwrap();
        write_evolution_banner(&mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nEvolution WITH elitism\n\nEvolution WITHOUT elitism\n"
        );
    }

    #[test]
    fn test_progress_printer_filters_generations() {
        let mut out = Vec::new();
        let mut printer = ProgressPrinter::new(&mut out);
        for g in 0..12 {
            printer.on_generation(&record(g, g as f64));
        }
        printer.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Generation 001: fitness = 0\nGeneration 010: fitness = 9\n"
        );
    }
}
