//! Candidate representation and the bi-objective problem contract.

use crate::error::EvalError;

/// A candidate solution in the bi-objective engine.
///
/// `objectives` is always consistent with `genes`: the runner evaluates a
/// candidate immediately after creating or varying it, before any
/// dominance comparison reads it. `rank` and `crowding` are assigned by
/// environmental selection; a candidate that has not passed through it yet
/// carries rank 0 and crowding 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Two-gene decision vector.
    pub genes: [f64; 2],

    /// Both objective values, minimized.
    pub objectives: [f64; 2],

    /// Summed magnitude of violated constraints; 0.0 means feasible.
    pub violation: f64,

    /// Non-dominated front index (0 = Pareto front).
    pub rank: usize,

    /// Crowding distance on this candidate's front; infinite for boundary
    /// points.
    pub crowding: f64,
}

impl Candidate {
    /// Wraps freshly produced genes, pending evaluation.
    pub fn unevaluated(genes: [f64; 2]) -> Self {
        Candidate {
            genes,
            objectives: [f64::INFINITY, f64::INFINITY],
            violation: 0.0,
            rank: 0,
            crowding: 0.0,
        }
    }

    /// Recomputes objectives and constraint violation from the genes.
    pub(crate) fn evaluate<P: BiObjective + ?Sized>(
        &mut self,
        problem: &P,
    ) -> Result<(), EvalError> {
        self.objectives = problem.objectives(self.genes)?;
        self.violation = problem
            .constraints(self.genes)
            .iter()
            .map(|&slack| (-slack).max(0.0))
            .sum();
        Ok(())
    }

    pub fn is_feasible(&self) -> bool {
        self.violation == 0.0
    }
}

/// A pure bi-objective evaluator over a two-gene domain, supplied by the
/// caller. Both objectives are minimized.
pub trait BiObjective: Send + Sync {
    /// Both objective values for a decision vector.
    ///
    /// An `Err` aborts the current generation; the run surfaces the error
    /// together with the last completed population.
    fn objectives(&self, genes: [f64; 2]) -> Result<[f64; 2], EvalError>;

    /// Inequality constraint slack values; `slack >= 0` means satisfied.
    ///
    /// Extension point for feasibility filtering (see
    /// [`Nsga2Config::constraint_filtering`](super::Nsga2Config)).
    /// Constraints are evaluated and recorded on every candidate but do
    /// not influence selection unless filtering is enabled. Default:
    /// unconstrained.
    fn constraints(&self, _genes: [f64; 2]) -> Vec<f64> {
        Vec::new()
    }

    /// Called after each completed generation with the size of the current
    /// Pareto front. Hook for logging or progress reporting. Default: no-op.
    fn on_generation(&self, _generation: usize, _front_size: usize) {}
}

/// Bi-objective test problem over `(x, y)`:
///
/// ```text
/// f1 = x^2 - y
/// f2 = -x/2 - y - 1
/// ```
///
/// with three linear inequality constraints (slack >= 0 feasible):
///
/// ```text
/// g1 = 6.5 - x/6 - y
/// g2 = 7.5 - x/2 - y
/// g3 = 30 - 5x - y
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadLinear;

impl BiObjective for QuadLinear {
    fn objectives(&self, [x, y]: [f64; 2]) -> Result<[f64; 2], EvalError> {
        Ok([x * x - y, -0.5 * x - y - 1.0])
    }

    fn constraints(&self, [x, y]: [f64; 2]) -> Vec<f64> {
        vec![
            6.5 - x / 6.0 - y,
            7.5 - 0.5 * x - y,
            30.0 - 5.0 * x - y,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsga2::ranking::dominates;

    #[test]
    fn test_quad_linear_hand_computed() {
        let a = QuadLinear.objectives([0.0, 0.0]).unwrap();
        let b = QuadLinear.objectives([2.0, 2.0]).unwrap();
        assert_eq!(a, [0.0, -1.0]);
        assert_eq!(b, [2.0, -4.0]);

        // A is better on f1, B on f2: a non-dominated pair
        assert!(!dominates(a, b));
        assert!(!dominates(b, a));
    }

    #[test]
    fn test_quad_linear_constraints() {
        // Origin satisfies all three constraints
        let slacks = QuadLinear.constraints([0.0, 0.0]);
        assert_eq!(slacks, vec![6.5, 7.5, 30.0]);

        // Large y breaks g1 first
        let slacks = QuadLinear.constraints([0.0, 7.0]);
        assert!(slacks[0] < 0.0);
    }

    #[test]
    fn test_violation_accumulates_only_broken_constraints() {
        let mut c = Candidate::unevaluated([0.0, 7.0]);
        c.evaluate(&QuadLinear).unwrap();
        // g1 = -0.5 and g2 = 0.5, g3 = 23: only g1 contributes
        assert!((c.violation - 0.5).abs() < 1e-12);
        assert!(!c.is_feasible());

        let mut c = Candidate::unevaluated([0.0, 0.0]);
        c.evaluate(&QuadLinear).unwrap();
        assert!(c.is_feasible());
    }
}
