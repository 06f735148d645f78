//! Parent selection from a Pareto population.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::pareto::{dominance_then_crowding, Population};
use crate::solution::Solution;
use rand::{Rng, RngCore};
use std::cmp::Ordering;

/// Binary (or k-ary) tournament on constraint-aware dominance, ties broken
/// by rank and crowding distance.
///
/// Candidates are drawn uniformly with replacement.
///
/// # Examples
///
/// ```
/// use u_moea::adaptive::TournamentSelection;
///
/// // Binary tournament
/// let sel = TournamentSelection::new(2);
/// assert_eq!(sel.size(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentSelection {
    size: usize,
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { size: 2 }
    }
}

impl TournamentSelection {
    /// Tournament of `size` candidates (at least 1).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the index of one tournament winner.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_index(&self, population: &Population, rng: &mut dyn RngCore) -> usize {
        let members = population.solutions();
        assert!(!members.is_empty(), "cannot select from empty population");

        let n = members.len();
        let mut best = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            if dominance_then_crowding(&members[idx], &members[best]) == Ordering::Less {
                best = idx;
            }
        }
        best
    }

    /// Draws `count` parents as owned copies.
    pub fn select(
        &self,
        population: &Population,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Solution> {
        (0..count)
            .map(|_| population.solutions()[self.select_index(population, rng)].clone())
            .collect()
    }
}
