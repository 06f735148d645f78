//! Adaptive multi-operator evolutionary engine.
//!
//! # Algorithm
//!
//! 1. Fill the population through the [`Initialization`] policy and
//!    evaluate it
//! 2. Pick a variation operator by adaptive probability and draw its
//!    parents by tournament
//! 3. Evaluate the offspring
//! 4. Merge them into the Pareto population (nondominated sort, crowding,
//!    truncate to capacity)
//! 5. Credit the operator for each surviving offspring
//! 6. Repeat 2–5 until a termination condition holds
//!
//! # Key Types
//!
//! - [`MoeaRunner`]: the step-wise state machine
//! - [`MoeaConfig`]: population size, budget, seed, time limit
//! - [`MoeaResult`]: final population, Pareto front, operator probabilities
//!
//! # References
//!
//! - Vrugt & Robinson (2007), "Improved evolutionary optimization from
//!   genetically adaptive multimethod search", *PNAS* 104(3)
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm:
//!   NSGA-II", *IEEE Trans. Evol. Comput.* 6(2)

mod config;
mod runner;
mod types;

pub use config::MoeaConfig;
pub use runner::MoeaRunner;
pub use types::{
    InjectedInitialization, Initialization, MoeaResult, RandomInitialization, RunState, StopReason,
    TerminationFn,
};
