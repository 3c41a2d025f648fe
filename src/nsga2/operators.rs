//! Randomized operators for the bi-objective engine.

use super::ranking::dominates;
use super::types::Candidate;
use crate::bounds::Bounds;
use rand::Rng;

/// Binary dominance tournament.
///
/// Draws two distinct indices uniformly at random and returns the one
/// whose candidate dominates the other; a non-dominated pair resolves to
/// the first draw. With `filter_constraints` enabled, a strictly lower
/// constraint violation wins before dominance is consulted.
///
/// The winner is the parent fed to crossover.
pub fn binary_tournament<R: Rng>(
    population: &[Candidate],
    filter_constraints: bool,
    rng: &mut R,
) -> usize {
    let n = population.len();
    assert!(n >= 2, "binary tournament needs at least two candidates");

    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }

    let (a, b) = (&population[i], &population[j]);
    if filter_constraints && a.violation != b.violation {
        return if a.violation < b.violation { i } else { j };
    }
    if dominates(b.objectives, a.objectives) {
        j
    } else {
        i
    }
}

/// Crossover over two-gene parents.
///
/// With probability `rate` the child is the coordinate-wise midpoint of
/// the parents; otherwise it takes parent1's first gene and parent2's
/// second (discrete recombination fallback). Either way the child of
/// in-bounds parents is in bounds.
pub fn crossover<R: Rng>(p1: [f64; 2], p2: [f64; 2], rate: f64, rng: &mut R) -> [f64; 2] {
    if rng.random_range(0.0..1.0) < rate {
        [(p1[0] + p2[0]) / 2.0, (p1[1] + p2[1]) / 2.0]
    } else {
        [p1[0], p2[1]]
    }
}

/// Multiplicative perturbation mutation.
///
/// With probability `rate`, scales **both** genes by a single factor drawn
/// uniformly from [0.8, 1.2], then clamps each gene back into `bounds`.
/// This is a whole-individual perturbation, not a per-gene reset.
pub fn perturb<R: Rng>(genes: &mut [f64; 2], rate: f64, bounds: Bounds, rng: &mut R) {
    if rng.random_range(0.0..1.0) < rate {
        let factor = rng.random_range(0.8..1.2);
        genes[0] = bounds.clamp(genes[0] * factor);
        genes[1] = bounds.clamp(genes[1] * factor);
    }
}
