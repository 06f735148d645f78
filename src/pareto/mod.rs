//! Pareto dominance, nondominated sorting, and the sorted population.
//!
//! # Key Types
//!
//! - [`Population`]: fixed-capacity population kept in (rank, crowding) order
//! - [`MergeOutcome`]: per-offspring survival report returned by a merge
//!
//! # Functions
//!
//! - [`dominance`]: constraint-aware Pareto dominance between solutions
//! - [`non_dominated_sort`]: front partitioning (Deb et al., 2002)
//! - [`crowding_distance`]: diversity measure within a front
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod comparator;
mod population;
mod sorting;

pub use comparator::{
    crowding_cmp, dominance, dominance_then_crowding, lexicographic_cmp, pareto_dominance,
    Dominance,
};
pub use population::{MergeOutcome, Population};
pub use sorting::{crowding_distance, non_dominated_sort, non_dominated_sort_by, NondominatedSortResult};
