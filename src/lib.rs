//! Real-coded evolutionary optimization.
//!
//! Two population-based search engines over real-valued decision vectors:
//!
//! - **Genetic Algorithm (GA)**: single-objective search with tournament
//!   selection, per-gene arithmetic blend crossover, and uniform reset
//!   mutation. The caller supplies the objective as a pure evaluator.
//! - **NSGA-II**: bi-objective search that ranks candidates by Pareto
//!   dominance and preserves diversity through crowding distance, with
//!   exact-size environmental selection over merged parent+offspring
//!   populations.
//!
//! Both engines own a single explicitly seeded random generator per run,
//! so a fixed seed reproduces the exact sequence of individuals. Objective
//! evaluation is pure and may run in parallel across a generation without
//! affecting that determinism.
//!
//! # Architecture
//!
//! Each engine lives in its own module with the same internal shape:
//! `config` (validated parameters), `types` (individuals and the problem
//! trait), `operators` (randomized variation), and `runner` (the
//! generational loop). Shared leaves sit at the crate root: gene bounds,
//! RNG construction, and error types.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

pub mod bounds;
pub mod error;
pub mod ga;
pub mod nsga2;
pub mod random;
