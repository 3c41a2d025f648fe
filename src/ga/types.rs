//! Individual representation and the objective contract.

use crate::error::EvalError;
use crate::bounds::Bounds;
use rand::Rng;

/// A candidate solution: one real-valued gene per dimension, plus the
/// cached fitness.
///
/// Fitness is the negated combined objective (higher is better). The
/// engine rewrites it immediately after every gene change, before any
/// selection reads it; a fresh or just-varied individual carries
/// `f64::NEG_INFINITY` until then.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub genes: Vec<f64>,
    pub fitness: f64,
}

impl Individual {
    /// Wraps freshly produced genes with the not-yet-evaluated sentinel.
    pub fn unevaluated(genes: Vec<f64>) -> Self {
        Individual {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates an individual with every gene drawn uniformly from `bounds`.
    pub fn random<R: Rng>(length: usize, bounds: Bounds, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| bounds.sample(rng)).collect();
        Individual::unevaluated(genes)
    }
}

/// A pure single-objective evaluator, supplied by the caller.
///
/// Lower objective values are better. The engine may evaluate distinct
/// individuals in parallel, hence `Send + Sync`. Implementations must not
/// hold mutable state; the same decision vector must always produce the
/// same value.
pub trait Objective: Send + Sync {
    /// Combined objective value for a decision vector.
    ///
    /// An `Err` aborts the current generation; the run surfaces the error
    /// together with the best individual found so far.
    fn objective(&self, genes: &[f64]) -> Result<f64, EvalError>;

    /// Called after each completed generation with the best fitness so far.
    ///
    /// Hook for logging or external progress reporting. Default: no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

/// Equal-weight scalarization of the Fonseca–Fleming bi-objective test
/// function.
///
/// With n genes and offset `d = 1/sqrt(n)`:
///
/// ```text
/// f1(x) = 1 - exp(-Σ (x_i - d)^2)
/// f2(x) = 1 - exp(-Σ (x_i + d)^2)
/// objective = 0.5 * f1 + 0.5 * f2
/// ```
///
/// The two partial objectives pull toward `x_i = +d` and `x_i = -d`
/// respectively; the blend has symmetric minima near both offsets, where
/// the objective evaluates to `0.5 * (1 - exp(-4))`, roughly `0.4908`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FonsecaBlend;

impl FonsecaBlend {
    fn deviation_sum(genes: &[f64], offset: f64) -> f64 {
        genes.iter().map(|x| (x - offset) * (x - offset)).sum()
    }

    /// First partial objective, pulling toward `+1/sqrt(n)`.
    pub fn f1(genes: &[f64]) -> f64 {
        let d = 1.0 / (genes.len() as f64).sqrt();
        1.0 - (-Self::deviation_sum(genes, d)).exp()
    }

    /// Second partial objective, pulling toward `-1/sqrt(n)`.
    pub fn f2(genes: &[f64]) -> f64 {
        let d = 1.0 / (genes.len() as f64).sqrt();
        1.0 - (-Self::deviation_sum(genes, -d)).exp()
    }
}

impl Objective for FonsecaBlend {
    fn objective(&self, genes: &[f64]) -> Result<f64, EvalError> {
        if genes.is_empty() {
            return Err("decision vector must not be empty".into());
        }
        Ok(0.5 * Self::f1(genes) + 0.5 * Self::f2(genes))
    }
}
