//! NSGA-II generational loop execution.
//!
//! Each generation: binary dominance tournaments pick two parents per
//! offspring slot, the winners are recombined and perturbed, the offspring
//! are evaluated, and environmental selection truncates the merged
//! parent+offspring set back to the configured population size.

use super::config::Nsga2Config;
use super::operators::{binary_tournament, crossover, perturb};
use super::ranking::environmental_selection;
use super::types::{BiObjective, Candidate};
use crate::error::{EvalError, EvoError, RunError};
use crate::random::create_rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Result {
    /// The final population, ranked and crowding-annotated. Taken as a
    /// whole it approximates the Pareto front; the rank-0 subset is the
    /// approximation proper.
    pub population: Vec<Candidate>,

    /// Number of generations actually completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Size of the rank-0 front after each generation.
    pub front_history: Vec<usize>,
}

impl Nsga2Result {
    /// The non-dominated (rank 0) subset of the final population.
    pub fn pareto_front(&self) -> Vec<Candidate> {
        self.population
            .iter()
            .copied()
            .filter(|c| c.rank == 0)
            .collect()
    }
}

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```
/// use revo::nsga2::{Nsga2Config, Nsga2Runner, QuadLinear};
///
/// let config = Nsga2Config::default().with_generations(30).with_seed(42);
/// let result = Nsga2Runner::run(&QuadLinear, &config).unwrap();
/// assert!(!result.pareto_front().is_empty());
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs the engine to completion.
    pub fn run<P: BiObjective>(
        problem: &P,
        config: &Nsga2Config,
    ) -> Result<Nsga2Result, RunError<Vec<Candidate>>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the engine with an optional cancellation token.
    ///
    /// The flag is observed once per generation, at the barrier between
    /// one environmental selection and the next round of tournaments. A
    /// cancelled run returns normally with `cancelled = true` and the last
    /// completed population.
    pub fn run_with_cancel<P: BiObjective>(
        problem: &P,
        config: &Nsga2Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Nsga2Result, RunError<Vec<Candidate>>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Initialize, evaluate, and rank the starting population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| {
                Candidate::unevaluated([
                    config.bounds.sample(&mut rng),
                    config.bounds.sample(&mut rng),
                ])
            })
            .collect();
        evaluate_population(problem, &mut population, config.parallel).map_err(|source| {
            RunError {
                source: EvoError::Evaluation { generation: 0, source },
                best_so_far: None,
            }
        })?;
        population = environmental_selection(population, config.population_size);

        let mut front_history = Vec::with_capacity(config.generations);
        let mut cancelled = false;
        let mut completed = 0usize;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // One offspring per population slot; the two tournament
            // winners are the parents that feed crossover
            let mut offspring = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size {
                let p1 =
                    population[binary_tournament(&population, config.constraint_filtering, &mut rng)];
                let p2 =
                    population[binary_tournament(&population, config.constraint_filtering, &mut rng)];
                let mut genes = crossover(p1.genes, p2.genes, config.crossover_rate, &mut rng);
                perturb(&mut genes, config.mutation_rate, config.bounds, &mut rng);
                offspring.push(Candidate::unevaluated(genes));
            }

            evaluate_population(problem, &mut offspring, config.parallel).map_err(|source| {
                RunError {
                    source: EvoError::Evaluation {
                        generation: gen + 1,
                        source,
                    },
                    best_so_far: Some(population.clone()),
                }
            })?;

            // Merge to 2N, then truncate back to exactly N
            let mut merged = std::mem::take(&mut population);
            merged.extend(offspring);
            population = environmental_selection(merged, config.population_size);
            debug_assert_eq!(population.len(), config.population_size);

            let front_size = population.iter().filter(|c| c.rank == 0).count();
            front_history.push(front_size);
            completed = gen + 1;
            problem.on_generation(completed, front_size);
        }

        Ok(Nsga2Result {
            population,
            generations: completed,
            cancelled,
            front_history,
        })
    }
}

/// Evaluates every candidate's objectives and constraint violation.
fn evaluate_population<P: BiObjective>(
    problem: &P,
    population: &mut [Candidate],
    parallel: bool,
) -> Result<(), EvalError> {
    if parallel {
        population
            .par_iter_mut()
            .try_for_each(|c| c.evaluate(problem))
    } else {
        population.iter_mut().try_for_each(|c| c.evaluate(problem))
    }
}
