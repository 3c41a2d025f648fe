//! Pareto dominance, non-dominated sorting, crowding distance, and
//! environmental selection.
//!
//! Everything here is deterministic arithmetic over objective pairs; no
//! randomness enters. These routines are the synchronization point of the
//! generational loop: they run on the full merged population after all
//! offspring have been evaluated.

use super::types::Candidate;
use std::cmp::Ordering;

/// Pareto dominance over minimized objective pairs.
///
/// `a` dominates `b` iff `a` is no worse on both objectives and strictly
/// better on at least one. The relation is irreflexive and antisymmetric:
/// a candidate never dominates itself, and two candidates never dominate
/// each other.
pub fn dominates(a: [f64; 2], b: [f64; 2]) -> bool {
    a[0] <= b[0] && a[1] <= b[1] && (a[0] < b[0] || a[1] < b[1])
}

/// Fast non-dominated sort (Deb et al., 2002).
///
/// Partitions indices into successive Pareto fronts: `fronts[0]` holds
/// every solution not dominated by any other, `fronts[1]` the solutions
/// dominated only by front 0, and so on. Every index appears in exactly
/// one front, so the partition always covers the whole input.
///
/// # Panics
///
/// Panics if `objectives` is empty.
pub fn pareto_fronts(objectives: &[[f64; 2]]) -> Vec<Vec<usize>> {
    let n = objectives.len();
    assert!(n > 0, "cannot sort an empty set");

    // For each solution: whom it dominates, and by how many it is dominated
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut dominator_count = vec![0usize; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(objectives[i], objectives[j]) {
                dominated[i].push(j);
                dominator_count[j] += 1;
            } else if dominates(objectives[j], objectives[i]) {
                dominated[j].push(i);
                dominator_count[i] += 1;
            }
        }
    }

    let first: Vec<usize> = (0..n).filter(|&i| dominator_count[i] == 0).collect();
    let mut fronts = vec![first];

    // Peeling a front can only release solutions into the next one
    let mut current = 0;
    while current < fronts.len() {
        let mut next = Vec::new();
        for &i in &fronts[current] {
            for &j in &dominated[i] {
                dominator_count[j] -= 1;
                if dominator_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        fronts.push(next);
        current += 1;
    }

    fronts
}

/// Crowding distance for one front (Deb et al., 2002).
///
/// For each objective the front is sorted by that objective's value; the
/// two boundary solutions receive infinite distance and each interior
/// solution accumulates the gap between its neighbors, normalized by the
/// objective's range across the front. An objective with zero range
/// contributes nothing. Fronts of one or two solutions are all-boundary.
pub fn crowding_distances(front: &[[f64; 2]]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0f64; n];
    for obj in 0..2 {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            front[a][obj]
                .partial_cmp(&front[b][obj])
                .unwrap_or(Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let range = front[order[n - 1]][obj] - front[order[0]][obj];
        if range > 0.0 {
            for w in 1..(n - 1) {
                let gap = front[order[w + 1]][obj] - front[order[w - 1]][obj];
                distances[order[w]] += gap / range;
            }
        }
    }

    distances
}

/// Environmental selection: truncates a merged population to exactly
/// `target` survivors.
///
/// Whole fronts are admitted in rank order while they fit; the first front
/// that would overflow is sorted by descending crowding distance and only
/// the most isolated candidates fill the remaining slots. Survivors get
/// their `rank` and `crowding` fields assigned here.
///
/// # Panics
///
/// Panics if `target` is zero or exceeds the merged population size.
pub fn environmental_selection(merged: Vec<Candidate>, target: usize) -> Vec<Candidate> {
    assert!(
        0 < target && target <= merged.len(),
        "target {} out of range for merged population of {}",
        target,
        merged.len()
    );

    let objectives: Vec<[f64; 2]> = merged.iter().map(|c| c.objectives).collect();
    let mut survivors = Vec::with_capacity(target);

    for (rank, front) in pareto_fronts(&objectives).into_iter().enumerate() {
        let front_objs: Vec<[f64; 2]> = front.iter().map(|&i| objectives[i]).collect();
        let crowding = crowding_distances(&front_objs);

        let admit = |slot: usize, survivors: &mut Vec<Candidate>| {
            let mut c = merged[front[slot]];
            c.rank = rank;
            c.crowding = crowding[slot];
            survivors.push(c);
        };

        let remaining = target - survivors.len();
        if front.len() <= remaining {
            for slot in 0..front.len() {
                admit(slot, &mut survivors);
            }
            if survivors.len() == target {
                break;
            }
        } else {
            // Partial front: keep the most isolated candidates
            let mut order: Vec<usize> = (0..front.len()).collect();
            order.sort_by(|&a, &b| {
                crowding[b]
                    .partial_cmp(&crowding[a])
                    .unwrap_or(Ordering::Equal)
            });
            for &slot in order.iter().take(remaining) {
                admit(slot, &mut survivors);
            }
            break;
        }
    }

    debug_assert_eq!(survivors.len(), target);
    survivors
}
