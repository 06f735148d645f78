//! The [`Solution`] container.

use super::variable::Variable;
use crate::error::{MoeaError, Result};

/// One candidate solution.
///
/// The shape (number of variables, objectives and constraints) is fixed at
/// construction. Objective and constraint values are only meaningful once
/// [`is_evaluated`](Solution::is_evaluated) is `true`; [`rank`](Solution::rank)
/// and [`crowding_distance`](Solution::crowding_distance) are only meaningful
/// for solutions read back from a [`Population`](crate::pareto::Population).
///
/// All objectives are **minimized**. A constraint value of `0.0` means
/// satisfied; any other value is a violation of that magnitude.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    variables: Vec<Variable>,
    objectives: Vec<f64>,
    constraints: Vec<f64>,
    evaluated: bool,
    rank: usize,
    crowding_distance: f64,
}

impl Solution {
    /// Creates an unevaluated solution with the given shape.
    pub fn new(variables: Vec<Variable>, num_objectives: usize, num_constraints: usize) -> Self {
        Self {
            variables,
            objectives: vec![f64::NAN; num_objectives],
            constraints: vec![0.0; num_constraints],
            evaluated: false,
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    /// Creates an already-evaluated solution.
    ///
    /// Useful for seeding a population with results from a previous run.
    pub fn evaluated(variables: Vec<Variable>, objectives: Vec<f64>, constraints: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraints,
            evaluated: true,
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Mutable access to the decision variables.
    ///
    /// Changing a variable invalidates any previous evaluation.
    pub fn variables_mut(&mut self) -> &mut [Variable] {
        self.evaluated = false;
        &mut self.variables
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn num_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn constraints(&self) -> &[f64] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Stores the outcome of an evaluation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either slice does not match the
    /// declared shape or holds a NaN. The solution is left unchanged in that
    /// case. Infinite values are accepted.
    pub fn set_evaluation(&mut self, objectives: &[f64], constraints: &[f64]) -> Result<()> {
        if objectives.len() != self.objectives.len() {
            return Err(MoeaError::config(format!(
                "expected {} objectives, got {}",
                self.objectives.len(),
                objectives.len()
            )));
        }
        if constraints.len() != self.constraints.len() {
            return Err(MoeaError::config(format!(
                "expected {} constraints, got {}",
                self.constraints.len(),
                constraints.len()
            )));
        }
        if let Some(i) = objectives.iter().position(|v| v.is_nan()) {
            return Err(MoeaError::config(format!("objective {i} is NaN")));
        }
        if let Some(i) = constraints.iter().position(|v| v.is_nan()) {
            return Err(MoeaError::config(format!("constraint {i} is NaN")));
        }
        self.objectives.copy_from_slice(objectives);
        self.constraints.copy_from_slice(constraints);
        self.evaluated = true;
        Ok(())
    }

    /// Sum of absolute constraint violations; `0.0` when feasible.
    pub fn constraint_violation(&self) -> f64 {
        self.constraints.iter().map(|c| c.abs()).sum()
    }

    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|&c| c == 0.0)
    }

    /// Pareto front index assigned by the last population merge.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Crowding distance assigned by the last population merge.
    pub fn crowding_distance(&self) -> f64 {
        self.crowding_distance
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    pub(crate) fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = distance;
    }

    /// Copies the variables into a fresh, unevaluated solution of the same
    /// shape. Variation operators start offspring from this.
    pub fn copy_unevaluated(&self) -> Self {
        Self::new(
            self.variables.clone(),
            self.objectives.len(),
            self.constraints.len(),
        )
    }

    /// Values of all variables if every variable is real.
    pub fn real_values(&self) -> Option<Vec<f64>> {
        self.variables.iter().map(Variable::as_real).collect()
    }
}
