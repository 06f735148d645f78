//! Adaptive operator selector.
//!
//! Keeps a probability per operator and shifts mass toward operators whose
//! offspring survive into the population.
//!
//! # References
//!
//! - Vrugt & Robinson (2007), "Improved evolutionary optimization from
//!   genetically adaptive multimethod search"
//! - Hadka & Reed (2013), "Borg: An Auto-Adaptive Many-Objective
//!   Evolutionary Computing Framework"

use super::config::AdaptiveConfig;
use super::selection::TournamentSelection;
use crate::error::{MoeaError, Result};
use crate::pareto::Population;
use crate::solution::Solution;
use crate::variation::Variation;
use rand::{Rng, RngCore};

/// Per-operator selection state.
#[derive(Debug, Clone)]
struct OperatorStats {
    probability: f64,
    credit: f64,
}

impl OperatorStats {
    fn new(probability: f64) -> Self {
        Self {
            probability,
            credit: 0.0,
        }
    }

    fn record(&mut self, credit: f64) {
        self.credit += credit;
    }

    fn reset(&mut self) {
        self.credit = 0.0;
    }
}

/// Roulette-wheel pick on operator probabilities.
fn roulette_select(stats: &[OperatorStats], rng: &mut dyn RngCore) -> usize {
    if stats.len() == 1 {
        return 0;
    }
    let total: f64 = stats.iter().map(|s| s.probability).sum();
    let mut roll = rng.random_range(0.0..total);
    for (i, stat) in stats.iter().enumerate() {
        roll -= stat.probability;
        if roll <= 0.0 {
            return i;
        }
    }
    stats.len() - 1
}

/// Chooses a variation operator per application and adapts the choice to
/// observed survival.
///
/// # Examples
///
/// ```
/// use u_moea::adaptive::{AdaptiveConfig, AdaptiveSelector, TournamentSelection};
/// use u_moea::variation::{Pm, Sbx, Variation};
///
/// let roster: Vec<Box<dyn Variation>> = vec![Box::new(Sbx::default()), Box::new(Pm::default())];
/// let selector = AdaptiveSelector::new(
///     roster,
///     AdaptiveConfig::default(),
///     TournamentSelection::new(2),
/// )
/// .unwrap();
/// assert_eq!(selector.probabilities(), vec![0.5, 0.5]);
/// ```
pub struct AdaptiveSelector {
    operators: Vec<Box<dyn Variation>>,
    stats: Vec<OperatorStats>,
    config: AdaptiveConfig,
    selection: TournamentSelection,
    applications: usize,
}

impl std::fmt::Debug for AdaptiveSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveSelector")
            .field("operators", &self.names())
            .field("probabilities", &self.probabilities())
            .field("applications", &self.applications)
            .finish()
    }
}

impl AdaptiveSelector {
    /// Creates a selector with uniform initial probabilities.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the roster is empty, an operator
    /// declares zero parents or zero offspring, or `config` is invalid for
    /// the roster size.
    pub fn new(
        operators: Vec<Box<dyn Variation>>,
        config: AdaptiveConfig,
        selection: TournamentSelection,
    ) -> Result<Self> {
        config.validate_for(operators.len())?;
        for op in &operators {
            if op.arity() == 0 || op.offspring() == 0 {
                return Err(MoeaError::config(format!(
                    "operator `{}` must take and produce at least one solution, got {} -> {}",
                    op.name(),
                    op.arity(),
                    op.offspring()
                )));
            }
        }

        let n = operators.len();
        let stats = vec![OperatorStats::new(1.0 / n as f64); n];
        Ok(Self {
            operators,
            stats,
            config,
            selection,
            applications: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// The operator at `index`.
    pub fn operator(&self, index: usize) -> &dyn Variation {
        self.operators[index].as_ref()
    }

    pub fn names(&self) -> Vec<&str> {
        self.operators.iter().map(|op| op.name()).collect()
    }

    /// Current selection probabilities, in roster order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.stats.iter().map(|s| s.probability).collect()
    }

    /// Total number of recorded operator applications.
    pub fn applications(&self) -> usize {
        self.applications
    }

    /// Picks an operator by probability and draws its parents by tournament.
    ///
    /// Returns the operator index and exactly `arity` parents.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select(&self, population: &Population, rng: &mut dyn RngCore) -> (usize, Vec<Solution>) {
        let index = roulette_select(&self.stats, rng);
        let arity = self.operators[index].arity();
        let parents = self.selection.select(population, arity, rng);
        (index, parents)
    }

    /// Records one application of operator `index`.
    ///
    /// `ranks` holds, per offspring, the rank it survived with or `None` if
    /// it was discarded (see [`MergeOutcome::ranks`](crate::pareto::MergeOutcome::ranks)).
    /// Probabilities are refreshed every `update_interval` applications.
    pub fn record(&mut self, index: usize, ranks: &[Option<usize>]) {
        let policy = self.config.credit;
        let credit: f64 = ranks.iter().flatten().map(|&r| policy.credit(r)).sum();
        self.stats[index].record(credit);
        self.applications += 1;

        if self.applications % self.config.update_interval == 0 {
            self.update();
        }
    }

    fn update(&mut self) {
        let n = self.stats.len();
        if n == 1 {
            self.stats[0].probability = 1.0;
            self.stats[0].reset();
            return;
        }

        let offset = self.config.credit_offset;
        let floor = self.config.min_probability;
        let rho = self.config.reaction_factor;

        let total: f64 = self.stats.iter().map(|s| s.credit + offset).sum();
        let spread = 1.0 - n as f64 * floor;
        for stat in &mut self.stats {
            let target = floor + spread * (stat.credit + offset) / total;
            stat.probability = (1.0 - rho) * stat.probability + rho * target;
            stat.reset();
        }

        log::debug!(
            "operator probabilities after {} applications: {}",
            self.applications,
            self.operators
                .iter()
                .zip(&self.stats)
                .map(|(op, s)| format!("{}={:.3}", op.name(), s.probability))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}
