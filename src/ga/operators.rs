//! Variation operators for real-coded chromosomes.
//!
//! Both operators preserve the gene-bound invariant: blend crossover is a
//! convex combination of in-bounds parents, and reset mutation draws
//! replacement genes from the bound interval itself.

use crate::bounds::Bounds;
use rand::Rng;

/// Arithmetic blend crossover producing two children.
///
/// Every gene of every child gets a fresh weight `alpha` in `[0, 1]`:
///
/// ```text
/// child_gene = alpha * parent1_gene + (1 - alpha) * parent2_gene
/// ```
///
/// The two children are independent draws, not mirror images, so a parent
/// pair contributes two distinct samples of the segment between them.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn blend_pair<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    let child1 = blend_one(parent1, parent2, rng);
    let child2 = blend_one(parent1, parent2, rng);
    (child1, child2)
}

fn blend_one<R: Rng>(parent1: &[f64], parent2: &[f64], rng: &mut R) -> Vec<f64> {
    parent1
        .iter()
        .zip(parent2.iter())
        .map(|(&a, &b)| {
            let alpha: f64 = rng.random_range(0.0..=1.0);
            alpha * a + (1.0 - alpha) * b
        })
        .collect()
}

/// Uniform reset mutation.
///
/// Each gene is independently replaced, with probability `rate`, by a
/// fresh uniform draw from `bounds`. This is a reset, not a perturbation:
/// the new value does not depend on the old one.
pub fn uniform_reset<R: Rng>(genes: &mut [f64], rate: f64, bounds: Bounds, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = bounds.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_blend_stays_between_parents() {
        let p1 = vec![-4.0, 0.0, 3.5];
        let p2 = vec![4.0, -2.0, 3.5];
        let mut rng = create_rng(42);

        for _ in 0..200 {
            let (c1, c2) = blend_pair(&p1, &p2, &mut rng);
            for child in [&c1, &c2] {
                for (i, &g) in child.iter().enumerate() {
                    let lo = p1[i].min(p2[i]);
                    let hi = p1[i].max(p2[i]);
                    assert!(lo <= g && g <= hi, "gene {i} = {g} escaped [{lo}, {hi}]");
                }
            }
        }
    }

    #[test]
    fn test_blend_children_differ() {
        let p1 = vec![-4.0; 8];
        let p2 = vec![4.0; 8];
        let mut rng = create_rng(42);
        let (c1, c2) = blend_pair(&p1, &p2, &mut rng);
        assert_ne!(c1, c2, "independent alpha draws should differ");
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_blend_length_mismatch_panics() {
        let mut rng = create_rng(42);
        blend_pair(&[1.0], &[1.0, 2.0], &mut rng);
    }

    #[test]
    fn test_reset_rate_zero_is_noop() {
        let bounds = Bounds::new(-4.0, 4.0).unwrap();
        let mut rng = create_rng(42);
        let mut genes = vec![1.0, -2.0, 3.0];
        let original = genes.clone();
        uniform_reset(&mut genes, 0.0, bounds, &mut rng);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_reset_rate_one_replaces_all_in_bounds() {
        let bounds = Bounds::new(-4.0, 4.0).unwrap();
        let mut rng = create_rng(42);
        // Start from out-of-bounds values so every survivor is detectable
        let mut genes = vec![100.0; 32];
        uniform_reset(&mut genes, 1.0, bounds, &mut rng);
        assert!(genes.iter().all(|&g| bounds.contains(g)));
    }

    proptest! {
        #[test]
        fn prop_blend_in_bounds(
            pair in proptest::collection::vec((-4.0f64..=4.0, -4.0f64..=4.0), 1..16),
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::new(-4.0, 4.0).unwrap();
            let p1: Vec<f64> = pair.iter().map(|&(a, _)| a).collect();
            let p2: Vec<f64> = pair.iter().map(|&(_, b)| b).collect();
            let mut rng = create_rng(seed);
            let (c1, c2) = blend_pair(&p1, &p2, &mut rng);
            prop_assert!(c1.iter().chain(c2.iter()).all(|&g| bounds.contains(g)));
        }

        #[test]
        fn prop_reset_in_bounds(
            mut genes in proptest::collection::vec(-4.0f64..=4.0, 1..16),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::new(-4.0, 4.0).unwrap();
            let mut rng = create_rng(seed);
            uniform_reset(&mut genes, rate, bounds, &mut rng);
            prop_assert!(genes.iter().all(|&g| bounds.contains(g)));
        }
    }
}
