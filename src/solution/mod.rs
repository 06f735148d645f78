//! Candidate solutions.
//!
//! A [`Solution`] holds decision [`Variable`]s (each carrying its
//! [`Domain`]), objective values, constraint values, and the rank/crowding
//! metadata assigned by a [`Population`](crate::pareto::Population).

mod types;
mod variable;

pub use types::Solution;
pub use variable::{Domain, Variable};
