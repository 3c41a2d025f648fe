//! Error types for configuration validation and run failures.
//!
//! Configuration problems are rejected before a run starts; evaluation
//! failures abort the current generation and surface alongside whatever
//! best result the run had produced so far.

use std::error::Error;
use std::fmt;

/// Boxed error returned by caller-supplied objective evaluators.
pub type EvalError = Box<dyn Error + Send + Sync + 'static>;

/// A rejected configuration parameter.
///
/// All variants are detectable before any individual is created; a config
/// that passes [`validate`](crate::ga::GaConfig::validate) cannot produce
/// one of these at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `population_size` below the minimum of 2.
    PopulationTooSmall(usize),
    /// Odd `population_size` in the GA, which pairs parents two at a time.
    OddPopulation(usize),
    /// `chromosome_length` of zero.
    EmptyChromosome,
    /// `tournament_size` outside `[1, population_size]`.
    TournamentSize { got: usize, population: usize },
    /// A probability parameter outside `[0, 1]`.
    RateOutOfRange { name: &'static str, value: f64 },
    /// `generations` of zero.
    NoGenerations,
    /// Gene bounds with `lo >= hi` or a non-finite endpoint.
    InvalidBounds { lo: f64, hi: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PopulationTooSmall(n) => {
                write!(f, "population_size must be at least 2, got {n}")
            }
            ConfigError::OddPopulation(n) => {
                write!(f, "population_size must be even for pairwise crossover, got {n}")
            }
            ConfigError::EmptyChromosome => {
                write!(f, "chromosome_length must be at least 1")
            }
            ConfigError::TournamentSize { got, population } => {
                write!(f, "tournament_size must be in [1, {population}], got {got}")
            }
            ConfigError::RateOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            ConfigError::NoGenerations => {
                write!(f, "generations must be at least 1")
            }
            ConfigError::InvalidBounds { lo, hi } => {
                write!(f, "gene bounds must satisfy lo < hi with finite endpoints, got [{lo}, {hi}]")
            }
        }
    }
}

impl Error for ConfigError {}

/// Top-level failure of an optimization run.
#[derive(Debug)]
pub enum EvoError {
    /// The configuration was rejected before the run started.
    Config(ConfigError),
    /// A caller-supplied evaluator failed for some decision vector.
    Evaluation { generation: usize, source: EvalError },
}

impl fmt::Display for EvoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvoError::Config(e) => write!(f, "invalid configuration: {e}"),
            EvoError::Evaluation { generation, source } => {
                write!(f, "objective evaluation failed at generation {generation}: {source}")
            }
        }
    }
}

impl Error for EvoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvoError::Config(e) => Some(e),
            EvoError::Evaluation { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<ConfigError> for EvoError {
    fn from(e: ConfigError) -> Self {
        EvoError::Config(e)
    }
}

/// An aborted run, carrying the best result produced before the failure.
///
/// `best_so_far` is `None` only when the failure happened before the
/// initial population finished evaluating. The payload type is the
/// engine's output: a single individual for the GA, a whole population
/// for NSGA-II.
#[derive(Debug)]
pub struct RunError<T> {
    pub source: EvoError,
    pub best_so_far: Option<T>,
}

impl<T> RunError<T> {
    pub(crate) fn config(e: ConfigError) -> Self {
        RunError {
            source: EvoError::Config(e),
            best_so_far: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for RunError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.source.fmt(f)
    }
}

impl<T: fmt::Debug> Error for RunError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<ConfigError> for RunError<T> {
    fn from(e: ConfigError) -> Self {
        RunError::config(e)
    }
}
