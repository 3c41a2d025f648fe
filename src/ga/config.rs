//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. All randomized behavior is
//! driven by these values plus the seed; nothing is read from ambient
//! state.

use crate::bounds::Bounds;
use crate::error::ConfigError;

/// Configuration for the single-objective GA.
///
/// # Builder Pattern
///
/// ```
/// use revo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_chromosome_length(8)
///     .with_tournament_size(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals, constant across generations.
    ///
    /// Must be even: replacement pairs parents two at a time and each pair
    /// yields two children.
    pub population_size: usize,

    /// Number of genes per individual (problem dimensionality).
    pub chromosome_length: usize,

    /// Tournament size for parent selection, in `[1, population_size]`.
    ///
    /// Higher values mean stronger selection pressure.
    pub tournament_size: usize,

    /// Probability that a parent pair is recombined by arithmetic blend
    /// (0.0 to 1.0). A pair that is not recombined passes its genes through
    /// unchanged. The default of 1.0 blends every pair.
    pub crossover_rate: f64,

    /// Per-gene probability of a uniform reset draw from the bound
    /// interval (0.0 to 1.0).
    pub mutation_rate: f64,

    /// Fixed number of generations to run; there is no convergence-based
    /// early stopping.
    pub generations: usize,

    /// Interval every gene is confined to.
    pub bounds: Bounds,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Evaluation consumes no randomness, so this does not affect
    /// determinism. Worth enabling only for expensive evaluators.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            chromosome_length: 1,
            tournament_size: 3,
            crossover_rate: 1.0,
            mutation_rate: 0.1,
            generations: 50,
            bounds: Bounds { lo: -4.0, hi: 4.0 },
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of genes per individual.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the gene bound interval.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Runners call this before touching the RNG, so an invalid config is
    /// rejected before any individual exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if self.chromosome_length == 0 {
            return Err(ConfigError::EmptyChromosome);
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                got: self.tournament_size,
                population: self.population_size,
            });
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        self.bounds.validate()
    }
}
