//! Single-objective real-coded Genetic Algorithm.
//!
//! The caller supplies the objective as a pure evaluator implementing
//! [`Objective`]; the engine owns the population, the seeded RNG, and the
//! generational loop. Lower objective values are better; the engine stores
//! fitness as the negated objective and maximizes it.
//!
//! # Key Types
//!
//! - [`GaConfig`]: validated run parameters (population size, tournament
//!   size, operator rates, gene bounds, seed)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual found plus per-generation history
//!
//! # Operators
//!
//! - Tournament selection over scalar fitness ([`selection`])
//! - Per-gene arithmetic blend crossover and uniform reset mutation
//!   ([`operators`])
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Fonseca & Fleming (1995), the bi-objective test function behind the
//!   built-in [`FonsecaBlend`] scalarization

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{FonsecaBlend, Individual, Objective};
