//! The [`Variation`] operator contract and operator composition.

use crate::error::{MoeaError, Result};
use crate::solution::Solution;
use rand::RngCore;

/// A variation operator: produces offspring from parents.
///
/// Operators declare how many parents they consume ([`arity`](Variation::arity))
/// and how many offspring they return ([`offspring`](Variation::offspring)).
/// The engine draws exactly `arity` parents and rejects a result of any
/// other length than `offspring` as a configuration error.
///
/// Parents are evaluated copies owned by the caller; offspring should start
/// from [`Solution::copy_unevaluated`] so that no stale objective values
/// leak through.
///
/// The RNG is passed as a trait object so that operators of different types
/// can share one roster (`Vec<Box<dyn Variation>>`).
///
/// # Implementing
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_moea::solution::Solution;
/// use u_moea::variation::Variation;
///
/// /// Nudges every real variable by up to ±0.01.
/// struct Jitter;
///
/// impl Variation for Jitter {
///     fn name(&self) -> &str {
///         "jitter"
///     }
///
///     fn arity(&self) -> usize {
///         1
///     }
///
///     fn offspring(&self) -> usize {
///         1
///     }
///
///     fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
///         let mut child = parents[0].copy_unevaluated();
///         for variable in child.variables_mut() {
///             if let Some(x) = variable.as_real() {
///                 variable.set_real(x + rng.random_range(-0.01..0.01));
///             }
///         }
///         vec![child]
///     }
/// }
/// ```
pub trait Variation: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Number of parents consumed per application.
    fn arity(&self) -> usize;

    /// Number of offspring produced per application.
    fn offspring(&self) -> usize;

    /// Produces offspring from exactly [`arity`](Variation::arity) parents.
    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution>;
}

impl<V: Variation + ?Sized> Variation for Box<V> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn offspring(&self) -> usize {
        (**self).offspring()
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        (**self).evolve(parents, rng)
    }
}

/// Applies a recombination operator, then a 1 → 1 mutation to each child.
///
/// ```
/// use u_moea::variation::{Compound, Pm, Sbx, Variation};
///
/// let op = Compound::new(Sbx::default(), Pm::default()).unwrap();
/// assert_eq!(op.name(), "sbx+pm");
/// assert_eq!(op.arity(), 2);
/// assert_eq!(op.offspring(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Compound<A, B> {
    first: A,
    second: B,
    name: String,
}

impl<A: Variation, B: Variation> Compound<A, B> {
    /// Chains `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `second` maps one parent to one
    /// offspring.
    pub fn new(first: A, second: B) -> Result<Self> {
        if second.arity() != 1 || second.offspring() != 1 {
            return Err(MoeaError::config(format!(
                "operator `{}` must map 1 parent to 1 offspring to follow `{}`, got {} -> {}",
                second.name(),
                first.name(),
                second.arity(),
                second.offspring()
            )));
        }
        let name = format!("{}+{}", first.name(), second.name());
        Ok(Self {
            first,
            second,
            name,
        })
    }
}

impl<A: Variation, B: Variation> Variation for Compound<A, B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.first.arity()
    }

    fn offspring(&self) -> usize {
        self.first.offspring()
    }

    fn evolve(&self, parents: &[Solution], rng: &mut dyn RngCore) -> Vec<Solution> {
        let children = self.first.evolve(parents, rng);
        let mut offspring = Vec::with_capacity(children.len());
        for child in &children {
            offspring.extend(self.second.evolve(std::slice::from_ref(child), rng));
        }
        offspring
    }
}
