//! Nondominated sorting and crowding distance.
//!
//! # Algorithms
//!
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::comparator::{dominance, Dominance};
use crate::solution::Solution;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the item
/// at the same index. Rank 0 is the Pareto front (non-dominated items).
#[derive(Debug, Clone, Default)]
pub struct NondominatedSortResult {
    /// Pareto rank for each item (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    ///
    /// Indices within a front are ascending.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting of solutions using constraint-aware
/// [`dominance`].
///
/// # Example
///
/// ```
/// use u_moea::pareto::non_dominated_sort;
/// use u_moea::solution::Solution;
///
/// let solutions: Vec<Solution> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
///     .iter()
///     .map(|o| Solution::evaluated(vec![], o.to_vec(), vec![]))
///     .collect();
///
/// let result = non_dominated_sort(&solutions);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort(solutions: &[Solution]) -> NondominatedSortResult {
    non_dominated_sort_by(solutions, dominance)
}

/// Fast non-dominated sorting with a caller-supplied dominance relation.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of items, determine dominance
/// 2. Items dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of items
pub fn non_dominated_sort_by<T, F>(items: &[T], dominates: F) -> NondominatedSortResult
where
    F: Fn(&T, &T) -> Dominance,
{
    let n = items.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominates(&items[i], &items[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // All pairs involving `i` have been visited at this point.
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    let mut current = 0;
    while current < fronts.len() {
        let mut next_front = Vec::new();

        for &i in &fronts[current] {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = current + 1;
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        next_front.sort_unstable();
        fronts.push(next_front);
        current += 1;
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance for each point, measuring how spread out
/// the points are in objective space. Higher distance means the point is
/// more isolated (more diverse).
///
/// Boundary points (min/max for any objective) receive `f64::INFINITY`.
/// Ties in an objective keep their input order, so the result is
/// deterministic.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of points
///
/// # Example
///
/// ```
/// use u_moea::pareto::crowding_distance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!(distances[1].is_finite());
/// ```
pub fn crowding_distance<O: AsRef<[f64]>>(objectives: &[O]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let mut distances = vec![0.0f64; n];
    let value = |i: usize, k: usize| objectives[i].as_ref()[k];

    for obj_idx in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| value(a, obj_idx).total_cmp(&value(b, obj_idx)));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = value(indices[0], obj_idx);
        let max_val = value(indices[n - 1], obj_idx);
        let range = max_val - min_val;

        // An infinite extreme leaves no scale: interior members gain nothing.
        if range.is_finite() && range > 0.0 {
            for i in 1..(n - 1) {
                let prev = value(indices[i - 1], obj_idx);
                let next = value(indices[i + 1], obj_idx);
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

/// Writes rank and crowding distance into every solution.
///
/// Crowding is computed within each front independently.
pub(crate) fn assign_rank_and_crowding(solutions: &mut [Solution]) {
    let sorted = non_dominated_sort(solutions);

    for front in &sorted.fronts {
        let objectives: Vec<&[f64]> = front.iter().map(|&i| solutions[i].objectives()).collect();
        let distances = crowding_distance(&objectives);

        for (&i, &d) in front.iter().zip(distances.iter()) {
            solutions[i].set_rank(sorted.ranks[i]);
            solutions[i].set_crowding_distance(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sols(objs: &[&[f64]]) -> Vec<Solution> {
        objs.iter()
            .map(|o| Solution::evaluated(vec![], o.to_vec(), vec![]))
            .collect()
    }

    // ---- Non-dominated sort ----

    #[test]
    fn test_empty() {
        let result = non_dominated_sort(&[]);
        assert!(result.ranks.is_empty());
        assert!(result.fronts.is_empty());
    }

    #[test]
    fn test_single_solution() {
        let result = non_dominated_sort(&sols(&[&[1.0, 2.0]]));
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_clear_dominance() {
        let result = non_dominated_sort(&sols(&[&[1.0, 1.0], &[2.0, 2.0], &[3.0, 3.0]]));
        assert_eq!(result.ranks, vec![0, 1, 2]);
        assert_eq!(result.fronts.len(), 3);
    }

    #[test]
    fn test_mixed_fronts() {
        let result = non_dominated_sort(&sols(&[
            &[1.0, 5.0],
            &[3.0, 3.0],
            &[5.0, 1.0],
            &[4.0, 4.0], // dominated by (3,3)
            &[6.0, 6.0], // dominated by (4,4) too
        ]));
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
        assert_eq!(result.fronts[0], vec![0, 1, 2]);
    }

    #[test]
    fn test_all_equal() {
        let result = non_dominated_sort(&sols(&[&[2.0, 2.0], &[2.0, 2.0], &[2.0, 2.0]]));
        assert!(result.ranks.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_infeasible_ranked_behind_feasible() {
        let solutions = vec![
            Solution::evaluated(vec![], vec![0.0, 0.0], vec![-1.0]),
            Solution::evaluated(vec![], vec![9.0, 9.0], vec![0.0]),
            Solution::evaluated(vec![], vec![0.0, 0.0], vec![-2.0]),
        ];
        let result = non_dominated_sort(&solutions);
        assert_eq!(result.ranks, vec![1, 0, 2]);
    }

    #[test]
    fn test_fronts_sorted_by_index() {
        let result = non_dominated_sort(&sols(&[
            &[5.0, 5.0],
            &[1.0, 1.0],
            &[4.0, 6.0],
            &[6.0, 4.0],
        ]));
        assert_eq!(result.fronts[0], vec![1]);
        assert_eq!(result.fronts[1], vec![0, 2, 3]);
    }

    // ---- Crowding distance ----

    #[test]
    fn test_crowding_two() {
        let dist = crowding_distance(&[vec![1.0, 3.0], vec![3.0, 1.0]]);
        assert!(dist.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        let objs = vec![
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let dist = crowding_distance(&objs);

        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());
        assert!((dist[1] - dist[2]).abs() < 1e-10);
        assert!((dist[2] - dist[3]).abs() < 1e-10);
        assert!((dist[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_crowding_reflects_spacing() {
        // (1,9) sits close to its neighbours, (6,4) is isolated.
        let objs = vec![
            vec![0.0, 10.0],
            vec![1.0, 9.0],
            vec![2.0, 8.0],
            vec![6.0, 4.0],
            vec![10.0, 0.0],
        ];
        let dist = crowding_distance(&objs);
        assert!(dist[1] < dist[3], "{dist:?}");
        assert!(dist[1] >= 0.0);
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        let dist = crowding_distance(&[vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]]);
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        assert!(dist[1].is_finite());
    }

    #[test]
    fn test_crowding_infinite_extreme() {
        let dist = crowding_distance(&[
            vec![0.0, f64::INFINITY],
            vec![1.0, 2.0],
            vec![2.0, 1.0],
            vec![3.0, 0.0],
        ]);
        assert!(dist[0].is_infinite());
        assert!(dist[3].is_infinite());
        // Only the first objective contributes.
        assert!((dist[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((dist[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowding_never_nan() {
        let dist = crowding_distance(&[
            vec![f64::NEG_INFINITY, 1.0],
            vec![0.0, f64::NAN],
            vec![1.0, 0.5],
            vec![f64::INFINITY, 0.0],
        ]);
        assert!(dist.iter().all(|d| !d.is_nan() && *d >= 0.0));
    }

    #[test]
    fn test_assign_rank_and_crowding() {
        let mut solutions = sols(&[&[1.0, 5.0], &[3.0, 3.0], &[5.0, 1.0], &[4.0, 4.0]]);
        assign_rank_and_crowding(&mut solutions);

        assert_eq!(solutions[1].rank(), 0);
        assert!(solutions[1].crowding_distance().is_finite());
        assert!(solutions[0].crowding_distance().is_infinite());
        assert_eq!(solutions[3].rank(), 1);
        // Alone in its front.
        assert!(solutions[3].crowding_distance().is_infinite());
    }
}
