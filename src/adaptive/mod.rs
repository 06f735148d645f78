//! Adaptive multi-operator selection.
//!
//! An [`AdaptiveSelector`] holds a roster of variation operators with a
//! selection probability each. Every application picks an operator by
//! probability, draws its parents by [`TournamentSelection`], and later
//! receives credit for each offspring that survived the population merge.
//! Probabilities are periodically recomputed from the accumulated credit
//! (see [`AdaptiveConfig`]).

mod config;
mod selection;
mod selector;

pub use config::{AdaptiveConfig, CreditAssignment};
pub use selection::TournamentSelection;
pub use selector::AdaptiveSelector;
