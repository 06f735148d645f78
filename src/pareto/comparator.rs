//! Dominance relation and solution orderings.
//!
//! All comparisons assume **minimization**.

use crate::solution::Solution;
use std::cmp::Ordering;

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compares two objective vectors for Pareto dominance.
///
/// ```
/// use u_moea::pareto::{pareto_dominance, Dominance};
///
/// assert_eq!(pareto_dominance(&[1.0, 2.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(pareto_dominance(&[1.0, 3.0], &[3.0, 1.0]), Dominance::Neither);
/// assert_eq!(pareto_dominance(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn pareto_dominance(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Constraint-aware dominance between two evaluated solutions.
///
/// Aggregate constraint violation is compared first: a feasible solution
/// dominates every infeasible one, and of two infeasible solutions the one
/// with the smaller violation dominates. Solutions with equal violation fall
/// back to [`pareto_dominance`] on their objectives.
pub fn dominance(a: &Solution, b: &Solution) -> Dominance {
    let va = a.constraint_violation();
    let vb = b.constraint_violation();

    if va < vb {
        Dominance::Left
    } else if vb < va {
        Dominance::Right
    } else {
        pareto_dominance(a.objectives(), b.objectives())
    }
}

/// Orders by rank ascending, then crowding distance descending.
///
/// This is the total order a [`Population`](super::Population) maintains.
pub fn crowding_cmp(a: &Solution, b: &Solution) -> Ordering {
    a.rank()
        .cmp(&b.rank())
        .then_with(|| descending_crowding(a, b))
}

/// Orders by [`dominance`] first, falling back to crowding distance
/// (descending) for mutually nondominated solutions.
///
/// Used to pick tournament winners.
pub fn dominance_then_crowding(a: &Solution, b: &Solution) -> Ordering {
    match dominance(a, b) {
        Dominance::Left => Ordering::Less,
        Dominance::Right => Ordering::Greater,
        Dominance::Neither => descending_crowding(a, b),
    }
}

/// Compares objectives one at a time, in order.
///
/// ```
/// use std::cmp::Ordering;
/// use u_moea::pareto::lexicographic_cmp;
/// use u_moea::solution::Solution;
///
/// let a = Solution::evaluated(vec![], vec![1.0, 9.0], vec![]);
/// let b = Solution::evaluated(vec![], vec![1.0, 2.0], vec![]);
/// assert_eq!(lexicographic_cmp(&a, &b), Ordering::Greater);
/// ```
pub fn lexicographic_cmp(a: &Solution, b: &Solution) -> Ordering {
    for (&va, &vb) in a.objectives().iter().zip(b.objectives().iter()) {
        if va < vb {
            return Ordering::Less;
        } else if va > vb {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

fn descending_crowding(a: &Solution, b: &Solution) -> Ordering {
    b.crowding_distance().total_cmp(&a.crowding_distance())
}
