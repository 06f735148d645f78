//! The [`Problem`] trait and the [`ProblemSpec`] descriptor.

use crate::error::{MoeaError, Result};
use crate::solution::{Domain, Solution};

/// Defines a multi-objective optimization problem.
///
/// The engine only needs the shape of the problem (variable domains, number
/// of objectives and constraints) and an evaluation routine. Evaluation may
/// run in-process or be delegated to another program, as
/// [`ExternalProblem`](super::ExternalProblem) does.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because offspring may be evaluated in
/// parallel (`parallel` feature). Implementations that talk to a single
/// external resource serialize access internally.
///
/// # Implementing
///
/// ```
/// use u_moea::error::Result;
/// use u_moea::problem::Problem;
/// use u_moea::solution::{Domain, Solution};
///
/// struct Schaffer {
///     domains: Vec<Domain>,
/// }
///
/// impl Problem for Schaffer {
///     fn domains(&self) -> &[Domain] {
///         &self.domains
///     }
///
///     fn num_objectives(&self) -> usize {
///         2
///     }
///
///     fn evaluate(&self, solution: &mut Solution) -> Result<()> {
///         let x = solution.variables()[0].as_real().unwrap_or(0.0);
///         solution.set_evaluation(&[x * x, (x - 2.0) * (x - 2.0)], &[])
///     }
/// }
/// ```
pub trait Problem: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &str {
        "problem"
    }

    /// Domains of the decision variables, in order.
    fn domains(&self) -> &[Domain];

    /// Number of objectives (all minimized).
    fn num_objectives(&self) -> usize;

    /// Number of constraints. Defaults to none.
    fn num_constraints(&self) -> usize {
        0
    }

    fn num_variables(&self) -> usize {
        self.domains().len()
    }

    /// Creates an unevaluated solution with every variable at its lower
    /// bound.
    fn new_solution(&self) -> Solution {
        Solution::new(
            self.domains().iter().map(Domain::instantiate).collect(),
            self.num_objectives(),
            self.num_constraints(),
        )
    }

    /// Computes objectives and constraints and stores them in `solution`.
    ///
    /// # Errors
    ///
    /// Implementations return an error instead of guessing values; the
    /// engine aborts the run.
    fn evaluate(&self, solution: &mut Solution) -> Result<()>;

    /// Releases resources held by the problem.
    ///
    /// Called exactly once by the engine when a run terminates. The default
    /// implementation does nothing.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Shape of a problem: variable domains plus objective and constraint
/// counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemSpec {
    /// Variable domains, in order.
    pub domains: Vec<Domain>,

    /// Number of objectives.
    pub num_objectives: usize,

    /// Number of constraints.
    pub num_constraints: usize,
}

impl ProblemSpec {
    pub fn new(domains: Vec<Domain>, num_objectives: usize, num_constraints: usize) -> Self {
        Self {
            domains,
            num_objectives,
            num_constraints,
        }
    }

    /// `num_variables` real variables, all in `[lower, upper]`.
    pub fn real(
        num_variables: usize,
        lower: f64,
        upper: f64,
        num_objectives: usize,
        num_constraints: usize,
    ) -> Self {
        Self::new(
            vec![Domain::real(lower, upper); num_variables],
            num_objectives,
            num_constraints,
        )
    }

    /// Validates the descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.domains.is_empty() {
            return Err(MoeaError::config("problem must have at least one variable"));
        }
        if self.num_objectives == 0 {
            return Err(MoeaError::config("problem must have at least one objective"));
        }
        for (i, domain) in self.domains.iter().enumerate() {
            domain
                .validate()
                .map_err(|e| MoeaError::config(format!("variable {i}: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Variable;

    struct Sum {
        domains: Vec<Domain>,
    }

    impl Problem for Sum {
        fn domains(&self) -> &[Domain] {
            &self.domains
        }

        fn num_objectives(&self) -> usize {
            1
        }

        fn num_constraints(&self) -> usize {
            1
        }

        fn evaluate(&self, solution: &mut Solution) -> Result<()> {
            let total: f64 = solution.variables().iter().filter_map(Variable::as_real).sum();
            solution.set_evaluation(&[total], &[0.0])
        }
    }

    #[test]
    fn test_default_new_solution() {
        let problem = Sum {
            domains: vec![Domain::real(1.0, 2.0), Domain::integer(3, 4)],
        };
        let s = problem.new_solution();
        assert_eq!(s.num_variables(), 2);
        assert_eq!(s.num_objectives(), 1);
        assert_eq!(s.num_constraints(), 1);
        assert_eq!(s.variables()[0].as_real(), Some(1.0));
        assert!(!s.is_evaluated());
        assert_eq!(problem.num_variables(), 2);
        assert!(problem.close().is_ok());
    }

    #[test]
    fn test_evaluate_in_process() {
        let problem = Sum {
            domains: vec![Domain::real(1.0, 2.0); 3],
        };
        let mut s = problem.new_solution();
        problem.evaluate(&mut s).unwrap();
        assert_eq!(s.objectives(), &[3.0]);
    }

    #[test]
    fn test_spec_validate() {
        assert!(ProblemSpec::real(2, 0.0, 1.0, 2, 0).validate().is_ok());
        assert!(ProblemSpec::real(0, 0.0, 1.0, 2, 0).validate().is_err());
        assert!(ProblemSpec::real(2, 0.0, 1.0, 0, 0).validate().is_err());
        assert!(ProblemSpec::real(2, 1.0, 0.0, 1, 0).validate().is_err());
    }
}
