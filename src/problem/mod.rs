//! Problem definitions and evaluation channels.
//!
//! - [`Problem`]: the contract between the engine and a problem: variable
//!   domains, objective/constraint counts, and evaluation.
//! - [`ProblemSpec`]: a plain descriptor of a problem's shape.
//! - [`ExternalProblem`]: evaluation delegated to a child process over a
//!   line-oriented stdin/stdout protocol.
//! - [`codec`]: request/response line encoding used by [`ExternalProblem`].

pub mod codec;
mod external;
mod types;

pub use external::ExternalProblem;
pub use types::{Problem, ProblemSpec};
