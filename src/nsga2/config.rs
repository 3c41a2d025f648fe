//! NSGA-II configuration.

use crate::bounds::Bounds;
use crate::error::ConfigError;

/// Configuration for the bi-objective engine.
///
/// Parent selection is a binary dominance tournament (two distinct draws
/// per parent), so there is no tournament-size knob here.
///
/// # Builder Pattern
///
/// ```
/// use revo::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(60)
///     .with_crossover_rate(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of candidates, constant at every generation boundary.
    /// The merged parent+offspring set is twice this size before
    /// environmental selection truncates it back.
    pub population_size: usize,

    /// Fixed number of generations to run.
    pub generations: usize,

    /// Probability that crossover produces the coordinate-wise midpoint of
    /// the two parents (0.0 to 1.0). Otherwise the child takes parent1's
    /// first gene and parent2's second.
    pub crossover_rate: f64,

    /// Probability that both genes of an offspring are scaled by one
    /// multiplicative factor drawn uniformly from [0.8, 1.2] (0.0 to 1.0).
    pub mutation_rate: f64,

    /// Interval both genes are confined to.
    pub bounds: Bounds,

    /// When enabled, the binary tournament prefers the candidate with the
    /// strictly lower constraint violation before consulting dominance.
    /// Off by default: constraints are recorded but not enforced.
    pub constraint_filtering: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate candidates in parallel using rayon.
    pub parallel: bool,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 40,
            generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            bounds: Bounds { lo: -7.0, hi: 4.0 },
            constraint_filtering: false,
            seed: None,
            parallel: false,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
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

    /// Sets the gene bound interval.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Enables or disables constraint-based tournament filtering.
    pub fn with_constraint_filtering(mut self, on: bool) -> Self {
        self.constraint_filtering = on;
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Nsga2Config::default();
        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 100);
        assert!((config.bounds.lo - -7.0).abs() < 1e-12);
        assert!(!config.constraint_filtering);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Nsga2Config::default()
            .with_population_size(80)
            .with_generations(250)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.2)
            .with_constraint_filtering(true)
            .with_seed(42)
            .with_parallel(true);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.generations, 250);
        assert!((config.crossover_rate - 0.7).abs() < 1e-12);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert!(config.constraint_filtering);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_rejections() {
        assert!(Nsga2Config::default().with_population_size(1).validate().is_err());
        assert!(Nsga2Config::default().with_generations(0).validate().is_err());
        assert!(Nsga2Config::default().with_crossover_rate(-0.1).validate().is_err());
        assert!(Nsga2Config::default().with_mutation_rate(1.5).validate().is_err());
        assert!(Nsga2Config::default()
            .with_bounds(Bounds { lo: 4.0, hi: 4.0 })
            .validate()
            .is_err());
    }
}
