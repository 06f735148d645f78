//! Adaptive operator selection configuration.

use crate::error::{MoeaError, Result};

/// How surviving offspring are converted into operator credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreditAssignment {
    /// Each surviving offspring earns 1.
    #[default]
    Survival,

    /// Each surviving offspring earns `1 / (1 + rank)`, favoring operators
    /// whose children land on the first front.
    Rank,
}

impl CreditAssignment {
    /// Credit earned by one offspring that survived with `rank`.
    pub fn credit(&self, rank: usize) -> f64 {
        match self {
            CreditAssignment::Survival => 1.0,
            CreditAssignment::Rank => 1.0 / (1.0 + rank as f64),
        }
    }
}

/// Configuration for [`AdaptiveSelector`](super::AdaptiveSelector).
///
/// # Update rule
///
/// Every `update_interval` operator applications, each operator `i` gets a
/// target probability
///
/// ```text
/// share_i  = (credit_i + credit_offset) / Σ_j (credit_j + credit_offset)
/// target_i = min_probability + (1 − n · min_probability) · share_i
/// p_i     ← (1 − ρ) · p_i + ρ · target_i
/// ```
///
/// where `n` is the roster size and `ρ` the `reaction_factor`. Credit and
/// usage counters then reset. Because both `p_i` and `target_i` are at least
/// `min_probability` and each set sums to 1, so does the blend.
///
/// # Examples
///
/// ```
/// use u_moea::adaptive::{AdaptiveConfig, CreditAssignment};
///
/// let config = AdaptiveConfig::default()
///     .with_update_interval(50)
///     .with_min_probability(0.05)
///     .with_credit(CreditAssignment::Rank);
/// assert!(config.validate_for(4).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveConfig {
    /// Operator applications between probability updates.
    pub update_interval: usize,

    /// Floor for every operator probability, in (0, 1 / n].
    pub min_probability: f64,

    /// Added to every operator's credit before normalizing.
    pub credit_offset: f64,

    /// Blend between the old and the target probabilities, in (0, 1].
    pub reaction_factor: f64,

    /// Credit policy.
    pub credit: CreditAssignment,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            update_interval: 100,
            min_probability: 0.03,
            credit_offset: 1.0,
            reaction_factor: 1.0,
            credit: CreditAssignment::Survival,
        }
    }
}

impl AdaptiveConfig {
    pub fn with_update_interval(mut self, n: usize) -> Self {
        self.update_interval = n.max(1);
        self
    }

    pub fn with_min_probability(mut self, p: f64) -> Self {
        self.min_probability = p;
        self
    }

    pub fn with_credit_offset(mut self, offset: f64) -> Self {
        self.credit_offset = offset;
        self
    }

    pub fn with_reaction_factor(mut self, rho: f64) -> Self {
        self.reaction_factor = rho;
        self
    }

    pub fn with_credit(mut self, credit: CreditAssignment) -> Self {
        self.credit = credit;
        self
    }

    /// Validates the configuration for a roster of `num_operators`.
    pub fn validate_for(&self, num_operators: usize) -> Result<()> {
        if num_operators == 0 {
            return Err(MoeaError::config("operator roster must not be empty"));
        }
        if self.update_interval == 0 {
            return Err(MoeaError::config("update_interval must be positive"));
        }
        if !(self.min_probability > 0.0) {
            return Err(MoeaError::config(format!(
                "min_probability must be positive, got {}",
                self.min_probability
            )));
        }
        if self.min_probability * num_operators as f64 > 1.0 {
            return Err(MoeaError::config(format!(
                "min_probability {} is too large for {} operators",
                self.min_probability, num_operators
            )));
        }
        if !(self.credit_offset > 0.0) || !self.credit_offset.is_finite() {
            return Err(MoeaError::config(format!(
                "credit_offset must be positive and finite, got {}",
                self.credit_offset
            )));
        }
        if self.reaction_factor <= 0.0 || self.reaction_factor > 1.0 {
            return Err(MoeaError::config(format!(
                "reaction_factor must be in (0, 1], got {}",
                self.reaction_factor
            )));
        }
        Ok(())
    }
}
