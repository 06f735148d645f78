//! Engine configuration.
//!
//! [`MoeaConfig`] holds the parameters of the evolutionary loop, including
//! the [`AdaptiveConfig`] for operator selection.

use crate::adaptive::AdaptiveConfig;
use crate::error::{MoeaError, Result};

/// Configuration for [`MoeaRunner`](super::MoeaRunner).
///
/// # Defaults
///
/// ```
/// use u_moea::moea::MoeaConfig;
///
/// let config = MoeaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_evaluations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::adaptive::AdaptiveConfig;
/// use u_moea::moea::MoeaConfig;
///
/// let config = MoeaConfig::default()
///     .with_population_size(200)
///     .with_max_evaluations(50_000)
///     .with_adaptive(AdaptiveConfig::default().with_update_interval(50))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoeaConfig {
    /// Capacity of the Pareto population.
    pub population_size: usize,

    /// Evaluation budget, including the initial population.
    pub max_evaluations: usize,

    /// Number of candidates per parent tournament.
    pub tournament_size: usize,

    /// Operator selection parameters.
    pub adaptive: AdaptiveConfig,

    /// Whether to evaluate a batch of solutions in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked once per step, so a run may overshoot by one step.
    pub time_limit_ms: Option<u64>,
}

impl Default for MoeaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_evaluations: 10_000,
            tournament_size: 2,
            adaptive: AdaptiveConfig::default(),
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl MoeaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k.max(1);
        self
    }

    pub fn with_adaptive(mut self, adaptive: AdaptiveConfig) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs: population 50, 5 000 evaluations, 10 s.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_evaluations: 5_000,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for thorough runs: population 200, 100 000 evaluations, 60 s.
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            max_evaluations: 100_000,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Operator selection parameters are validated against the roster when
    /// the runner is built.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(MoeaError::config("population_size must be at least 1"));
        }
        if self.max_evaluations == 0 {
            return Err(MoeaError::config("max_evaluations must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(MoeaError::config("tournament_size must be at least 1"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(MoeaError::config("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}
