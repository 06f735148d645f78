//! Variation operators.
//!
//! Every operator implements [`Variation`], declaring its arity (parents in)
//! and offspring count (children out). Operators of mixed arity can share one
//! roster as `Vec<Box<dyn Variation>>`.
//!
//! # Operators
//!
//! | Operator | Parents → Offspring |
//! |----------|---------------------|
//! | [`Sbx`] | 2 → 2 |
//! | [`DifferentialEvolution`] | 4 → 1 |
//! | [`Spx`] | n → k (default 3 → 2) |
//! | [`Pm`] | 1 → 1 |
//! | [`Um`] | 1 → 1 |
//! | [`Compound`] | same as its first operator |

mod operators;
mod types;

pub use operators::{DifferentialEvolution, Pm, Sbx, Spx, Um};
pub use types::{Compound, Variation};
