//! Fixed-capacity population kept in nondominated-sorting order.

use super::comparator::crowding_cmp;
use super::sorting::assign_rank_and_crowding;
use crate::error::{MoeaError, Result};
use crate::solution::Solution;

/// A population of at most `capacity` evaluated solutions.
///
/// After every [`merge`](Population::merge) the members are ordered by
/// rank ascending, then crowding distance descending, and hold up-to-date
/// rank and crowding values. Members are only reachable through shared
/// references.
///
/// # Example
///
/// ```
/// use u_moea::pareto::Population;
/// use u_moea::solution::Solution;
///
/// let mut population = Population::new(2);
/// let incoming = [[1.0, 4.0], [4.0, 1.0], [5.0, 5.0]]
///     .iter()
///     .map(|o| Solution::evaluated(vec![], o.to_vec(), vec![]))
///     .collect();
///
/// let outcome = population.merge(incoming).unwrap();
/// assert_eq!(population.len(), 2);
/// assert!(!outcome.survived(2));
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    capacity: usize,
    members: Vec<Solution>,
}

/// Which incoming solutions made it through a [`Population::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    ranks: Vec<Option<usize>>,
}

impl MergeOutcome {
    /// Whether the `i`-th incoming solution was retained.
    pub fn survived(&self, i: usize) -> bool {
        self.ranks.get(i).is_some_and(Option::is_some)
    }

    /// Rank of each incoming solution, `None` where it was discarded.
    pub fn ranks(&self) -> &[Option<usize>] {
        &self.ranks
    }

    /// Number of incoming solutions that were retained.
    pub fn survivor_count(&self) -> usize {
        self.ranks.iter().filter(|r| r.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Population {
    /// Creates an empty population.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "population capacity must be positive");
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in (rank, crowding) order.
    pub fn solutions(&self) -> &[Solution] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.members.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.members.iter()
    }

    /// Members of the given front, in crowding order.
    pub fn front(&self, rank: usize) -> impl Iterator<Item = &Solution> {
        self.members.iter().filter(move |s| s.rank() == rank)
    }

    /// Merges `incoming` into the population and truncates to capacity.
    ///
    /// The union of members and incoming solutions is partitioned into
    /// dominance fronts, crowding distances are computed per front, and the
    /// best `capacity` solutions under (rank asc, crowding desc) are kept.
    /// Ties keep insertion order: current members first, then `incoming` in
    /// the order given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, leaving the population unchanged, if
    /// any incoming solution is unevaluated, has no objectives, or its
    /// objective/constraint counts differ from the rest.
    pub fn merge(&mut self, incoming: Vec<Solution>) -> Result<MergeOutcome> {
        self.check_shape(&incoming)?;

        let old_len = self.members.len();
        let mut union = std::mem::take(&mut self.members);
        union.extend(incoming);
        let total = union.len();

        assign_rank_and_crowding(&mut union);

        // Stable sort: equal keys keep insertion order.
        let mut order: Vec<usize> = (0..total).collect();
        order.sort_by(|&a, &b| crowding_cmp(&union[a], &union[b]));

        let keep = total.min(self.capacity);
        let mut ranks = vec![None; total - old_len];
        for &i in &order[..keep] {
            if i >= old_len {
                ranks[i - old_len] = Some(union[i].rank());
            }
        }

        let mut slots: Vec<Option<Solution>> = union.into_iter().map(Some).collect();
        self.members = order[..keep]
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();

        if keep < total {
            // Crowding of the partially kept front changed.
            assign_rank_and_crowding(&mut self.members);
            self.members.sort_by(crowding_cmp);
        }

        Ok(MergeOutcome { ranks })
    }

    fn check_shape(&self, incoming: &[Solution]) -> Result<()> {
        let reference = self.members.first().or_else(|| incoming.first());
        let Some(reference) = reference else {
            return Ok(());
        };
        let objectives = reference.num_objectives();
        let constraints = reference.num_constraints();

        if objectives == 0 {
            return Err(MoeaError::config("solutions must have at least one objective"));
        }

        for (i, solution) in incoming.iter().enumerate() {
            if !solution.is_evaluated() {
                return Err(MoeaError::config(format!(
                    "incoming solution {i} has not been evaluated"
                )));
            }
            if solution.num_objectives() != objectives {
                return Err(MoeaError::config(format!(
                    "incoming solution {i} has {} objectives, expected {objectives}",
                    solution.num_objectives()
                )));
            }
            if solution.num_constraints() != constraints {
                return Err(MoeaError::config(format!(
                    "incoming solution {i} has {} constraints, expected {constraints}",
                    solution.num_constraints()
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
