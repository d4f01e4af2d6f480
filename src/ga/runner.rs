//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization → evaluation → record → selection → crossover → mutation →
//! (elitism) → repeat.

use super::config::GaConfig;
use super::elitism::apply_elitism;
use super::fitness::{evaluate, FITNESS_DIGITS};
use super::operators::{crossover, mutate};
use super::selection::select_parents;
use super::types::{GenerationRecord, RunResult};
use crate::error::ConfigError;
use crate::numeric::{argmax, round_to};
use crate::random::{rng_from_option, uniform};
use log::{debug, info};
use rand::Rng;

/// Receives each generation's record as soon as it is taken.
///
/// Closures `FnMut(&GenerationRecord)` implement this trait.
pub trait GenerationObserver {
    /// Called once per generation, before the population is replaced.
    fn on_generation(&mut self, record: &GenerationRecord);
}

impl<F: FnMut(&GenerationRecord)> GenerationObserver for F {
    fn on_generation(&mut self, record: &GenerationRecord) {
        self(record)
    }
}

/// Observer that ignores every generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _record: &GenerationRecord) {}
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use elitism_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_elitism(true).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.history.len(), config.num_generations);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the generator built from `config.seed`.
    pub fn run(config: &GaConfig) -> Result<RunResult, ConfigError> {
        Self::run_with_observer(config, &mut NoopObserver)
    }

    /// Runs the GA, reporting each generation to `observer`.
    pub fn run_with_observer<O: GenerationObserver + ?Sized>(
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<RunResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(config, &mut rng, observer)
    }

    /// Runs the GA with a caller-supplied generator.
    ///
    /// The initial population is drawn uniformly from `config.bounds`.
    pub fn run_with_rng<R: Rng, O: GenerationObserver + ?Sized>(
        config: &GaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<RunResult, ConfigError> {
        config.validate()?;
        let bounds = config.bounds;
        let population: Vec<f64> = (0..config.population_size)
            .map(|_| uniform(rng, bounds.min, bounds.max))
            .collect();
        Self::run_from_population(config, population, rng, observer)
    }

    /// Runs the GA starting from `population`.
    ///
    /// Initial values are clamped into `config.bounds`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid or the
    /// population length differs from `config.population_size`.
    pub fn run_from_population<R: Rng, O: GenerationObserver + ?Sized>(
        config: &GaConfig,
        population: Vec<f64>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<RunResult, ConfigError> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            });
        }

        let bounds = config.bounds;
        let sigma = config.sigma();
        let mut population: Vec<f64> = population.into_iter().map(|x| bounds.clamp(x)).collect();
        let mut history: Vec<GenerationRecord> = Vec::with_capacity(config.num_generations);

        for gen in 0..config.num_generations {
            // 1. Evaluate
            let fitness = evaluate(&population);

            // 2. Record generation best
            let best_idx = argmax(&fitness).ok_or(ConfigError::PopulationTooSmall(0))?;
            let record = GenerationRecord {
                generation: gen,
                best_fitness: fitness[best_idx],
                best_value: population[best_idx],
            };
            debug!(
                "generation {}: best_fitness={} best_value={}",
                gen + 1,
                record.best_fitness,
                record.best_value
            );
            observer.on_generation(&record);
            history.push(record);

            // 3-5. Selection, crossover, mutation
            let parents = select_parents(&fitness, config.tournament_size, rng)?;
            let children = crossover(&population, &parents, config.crossover_rate, bounds, rng);
            let mutated = mutate(&children, config.mutation_rate, sigma, bounds, rng);

            // 6. Replacement
            population = if config.elitism {
                apply_elitism(&mutated, record.best_value)
            } else {
                mutated
            };
        }

        let result = best_of_history(history, config.elitism)?;
        info!(
            "run finished (elitism={}): best_value={} best_fitness={}",
            config.elitism, result.best_value, result.best_fitness
        );
        Ok(result)
    }
}

/// Picks the first history entry with the highest fitness.
fn best_of_history(history: Vec<GenerationRecord>, elitism: bool) -> Result<RunResult, ConfigError> {
    let fitness: Vec<f64> = history.iter().map(|r| r.best_fitness).collect();
    let best = argmax(&fitness)
        .map(|i| history[i])
        .ok_or(ConfigError::NoGenerations)?;
    Ok(RunResult {
        best_value: round_to(best.best_value, FITNESS_DIGITS),
        best_fitness: round_to(best.best_fitness, FITNESS_DIGITS),
        elitism,
        history,
    })
}

// ============================================================================
// Tests
// ============================================================================
