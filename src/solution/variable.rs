//! Decision variables and their domains.

use crate::error::{MoeaError, Result};
use rand::Rng;

/// The declared domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// A real value in `[lower, upper]`.
    Real { lower: f64, upper: f64 },

    /// An integer value in `[lower, upper]`.
    Integer { lower: i64, upper: i64 },

    /// One of `cardinality` unordered categories, identified by index.
    Categorical { cardinality: usize },
}

impl Domain {
    /// Bounded real domain.
    pub fn real(lower: f64, upper: f64) -> Self {
        Domain::Real { lower, upper }
    }

    /// Bounded integer domain.
    pub fn integer(lower: i64, upper: i64) -> Self {
        Domain::Integer { lower, upper }
    }

    /// Categorical domain with `cardinality` choices.
    pub fn categorical(cardinality: usize) -> Self {
        Domain::Categorical { cardinality }
    }

    /// Checks that the bounds describe a non-empty domain.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Domain::Real { lower, upper } => {
                if !lower.is_finite() || !upper.is_finite() {
                    return Err(MoeaError::config(format!(
                        "real domain bounds must be finite, got [{lower}, {upper}]"
                    )));
                }
                if lower > upper {
                    return Err(MoeaError::config(format!(
                        "real domain lower bound {lower} exceeds upper bound {upper}"
                    )));
                }
            }
            Domain::Integer { lower, upper } => {
                if lower > upper {
                    return Err(MoeaError::config(format!(
                        "integer domain lower bound {lower} exceeds upper bound {upper}"
                    )));
                }
            }
            Domain::Categorical { cardinality } => {
                if cardinality == 0 {
                    return Err(MoeaError::config(
                        "categorical domain must have at least one category",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Creates a variable of this domain set to its lower bound.
    pub fn instantiate(&self) -> Variable {
        match *self {
            Domain::Real { lower, upper } => Variable::Real {
                value: lower,
                lower,
                upper,
            },
            Domain::Integer { lower, upper } => Variable::Integer {
                value: lower,
                lower,
                upper,
            },
            Domain::Categorical { cardinality } => Variable::Categorical {
                index: 0,
                cardinality,
            },
        }
    }

    /// Creates a variable of this domain with a uniformly sampled value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Variable {
        let mut variable = self.instantiate();
        variable.randomize(rng);
        variable
    }
}

/// A decision variable: a value together with its domain bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variable {
    /// Bounded real variable.
    Real { value: f64, lower: f64, upper: f64 },

    /// Bounded integer variable.
    Integer { value: i64, lower: i64, upper: i64 },

    /// Categorical variable; `index < cardinality`.
    Categorical { index: usize, cardinality: usize },
}

impl Variable {
    /// Returns the domain this variable was created from.
    pub fn domain(&self) -> Domain {
        match *self {
            Variable::Real { lower, upper, .. } => Domain::Real { lower, upper },
            Variable::Integer { lower, upper, .. } => Domain::Integer { lower, upper },
            Variable::Categorical { cardinality, .. } => Domain::Categorical { cardinality },
        }
    }

    /// Short name of the variable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Variable::Real { .. } => "real",
            Variable::Integer { .. } => "integer",
            Variable::Categorical { .. } => "categorical",
        }
    }

    /// Returns the value of a real variable, `None` for other kinds.
    pub fn as_real(&self) -> Option<f64> {
        match *self {
            Variable::Real { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns `(lower, upper)` for a real variable.
    pub fn real_bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Variable::Real { lower, upper, .. } => Some((lower, upper)),
            _ => None,
        }
    }

    /// Sets the value of a real variable, clamped into its bounds.
    ///
    /// Returns `false` (and leaves the variable untouched) for other kinds.
    pub fn set_real(&mut self, new_value: f64) -> bool {
        match self {
            Variable::Real {
                value,
                lower,
                upper,
            } => {
                *value = new_value.clamp(*lower, *upper);
                true
            }
            _ => false,
        }
    }

    /// Replaces the value with one sampled uniformly from the domain.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            Variable::Real {
                value,
                lower,
                upper,
            } => {
                *value = if lower < upper {
                    rng.random_range(*lower..=*upper)
                } else {
                    *lower
                };
            }
            Variable::Integer {
                value,
                lower,
                upper,
            } => {
                *value = rng.random_range(*lower..=*upper);
            }
            Variable::Categorical { index, cardinality } => {
                *index = rng.random_range(0..*cardinality);
            }
        }
    }
}
