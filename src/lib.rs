//! Adaptive multi-operator, multi-objective evolutionary optimization.
//!
//! Evolves a population of candidate solutions toward the Pareto-optimal
//! trade-off surface of black-box, possibly constrained problems:
//!
//! - **Pareto population** ([`pareto`]): nondominated sorting, crowding
//!   distance, and merge-and-truncate to a fixed capacity.
//! - **Variation operators** ([`variation`]): SBX, polynomial and uniform
//!   mutation, differential evolution, and composition, behind one trait.
//! - **Adaptive operator selection** ([`adaptive`]): operator probabilities
//!   follow how often each operator's offspring survive.
//! - **Evolutionary loop** ([`moea`]): a step-wise state machine with
//!   budget, predicate, time-limit, and cooperative cancellation.
//! - **Problems** ([`problem`]): in-process problems or evaluation by an
//!   external process over a line-oriented stdin/stdout protocol.
//!
//! # Architecture
//!
//! This crate contains no problem-specific concepts; benchmark problems,
//! experiment drivers, and result files belong to consumers.

pub mod adaptive;
pub mod error;
pub mod moea;
pub mod pareto;
pub mod problem;
pub mod random;
pub mod solution;
pub mod variation;
