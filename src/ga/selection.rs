//! Tournament selection over scalar fitness.
//!
//! Draws `k` individuals uniformly at random **with replacement** and
//! returns the one with the highest fitness. Ties keep the first-seen
//! candidate, so the draw order matters only when fitness values collide.

use super::types::Individual;
use rand::Rng;

/// Selects a parent index by `k`-way tournament.
///
/// Config validation guarantees `1 <= k <= population.len()` before a run
/// starts.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .map(|&f| Individual {
                genes: vec![0.0],
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[-10.0, -5.0, -1.0, -8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // Index 2 (fitness -1.0, the maximum) should dominate
        assert!(
            counts[2] > 6000,
            "expected best selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[-10.0, -5.0, -1.0, -8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_equal_fitness_stays_uniform() {
        // Strict-greater comparison keeps the first-seen draw on ties
        let pop = make_population(&[3.0, 3.0, 3.0, 3.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 2, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform on ties, got {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 1, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
