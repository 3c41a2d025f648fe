//! NSGA-II-style bi-objective evolutionary engine.
//!
//! Candidates carry exactly two minimized objectives over a two-gene
//! decision vector. Each generation merges parents and offspring, ranks
//! the merged set into Pareto fronts, and truncates back to the target
//! population size by crowding distance, so the population size is exact
//! at every generation boundary.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: validated run parameters
//! - [`Nsga2Runner`]: executes the merge-rank-truncate loop
//! - [`Nsga2Result`]: final population, understood as a Pareto front
//!   approximation
//!
//! # Submodules
//!
//! - [`ranking`]: dominance relation, fast non-dominated sort, crowding
//!   distance, and exact-size environmental selection
//! - [`operators`]: binary dominance tournament, midpoint/coordinate-swap
//!   crossover, multiplicative perturbation mutation
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Trans. Evolutionary Computation 6(2)

mod config;
pub mod operators;
pub mod ranking;
mod runner;
mod types;

pub use config::Nsga2Config;
pub use runner::{Nsga2Result, Nsga2Runner};
pub use types::{BiObjective, Candidate, QuadLinear};
