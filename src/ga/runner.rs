//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational state machine: initialize,
//! evaluate, select, vary, replace, repeat for a fixed generation count.
//! Replacement is wholesale (no elitism); the all-time best individual is
//! tracked separately and returned at the end.

use super::config::GaConfig;
use super::operators::{blend_pair, uniform_reset};
use super::selection::tournament;
use super::types::{Individual, Objective};
use crate::error::{EvalError, EvoError, RunError};
use crate::random::create_rng;
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run. Replacement is
    /// non-elitist, so this is not necessarily a member of the final
    /// population.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness`; negated objective).
    pub best_fitness: f64,

    /// Number of generations actually completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-so-far fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use revo::ga::{FonsecaBlend, GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&FonsecaBlend, &config).unwrap();
/// assert!(result.best_fitness.is_finite());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    pub fn run<O: Objective>(
        objective: &O,
        config: &GaConfig,
    ) -> Result<GaResult, RunError<Individual>> {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is observed once per generation, between the end of one
    /// replacement and the start of the next selection. A cancelled run
    /// returns normally with `cancelled = true` and the best individual
    /// found up to that point.
    pub fn run_with_cancel<O: Objective>(
        objective: &O,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, RunError<Individual>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Initialize and evaluate the starting population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(config.chromosome_length, config.bounds, &mut rng))
            .collect();
        evaluate_population(objective, &mut population, config.parallel).map_err(|source| {
            RunError {
                source: EvoError::Evaluation { generation: 0, source },
                best_so_far: None,
            }
        })?;

        let mut best = best_of(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness);

        let mut cancelled = false;
        let mut completed = 0usize;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Select population_size parents by tournament
            let parents: Vec<usize> = (0..config.population_size)
                .map(|_| tournament(&population, config.tournament_size, &mut rng))
                .collect();

            // Consecutive pairs each yield two children, keeping the
            // offspring set the same size as the parent set
            let mut offspring = Vec::with_capacity(config.population_size);
            for pair in parents.chunks_exact(2) {
                let p1 = &population[pair[0]].genes;
                let p2 = &population[pair[1]].genes;
                let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    blend_pair(p1, p2, &mut rng)
                } else {
                    (p1.clone(), p2.clone())
                };
                uniform_reset(&mut c1, config.mutation_rate, config.bounds, &mut rng);
                uniform_reset(&mut c2, config.mutation_rate, config.bounds, &mut rng);
                offspring.push(Individual::unevaluated(c1));
                offspring.push(Individual::unevaluated(c2));
            }

            evaluate_population(objective, &mut offspring, config.parallel).map_err(
                |source| RunError {
                    source: EvoError::Evaluation {
                        generation: gen + 1,
                        source,
                    },
                    best_so_far: Some(best.clone()),
                },
            )?;

            // Wholesale replacement, no elitism
            population = offspring;
            debug_assert_eq!(population.len(), config.population_size);

            let gen_best = best_of(&population);
            if gen_best.fitness > best.fitness {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness);
            completed = gen + 1;
            objective.on_generation(completed, best.fitness);
        }

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations: completed,
            cancelled,
            fitness_history,
        })
    }
}

/// Evaluates every individual, storing fitness = -objective.
fn evaluate_population<O: Objective>(
    objective: &O,
    population: &mut [Individual],
    parallel: bool,
) -> Result<(), EvalError> {
    if parallel {
        population.par_iter_mut().try_for_each(|ind| {
            ind.fitness = -objective.objective(&ind.genes)?;
            Ok(())
        })
    } else {
        for ind in population.iter_mut() {
            ind.fitness = -objective.objective(&ind.genes)?;
        }
        Ok(())
    }
}

/// The individual with the highest fitness.
fn best_of(population: &[Individual]) -> &Individual {
    population
        .iter()
        .max_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
