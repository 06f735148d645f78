//! Run state, stop reasons, results, and initialization policies.

use crate::pareto::Population;
use crate::problem::Problem;
use crate::solution::Solution;
use rand::RngCore;
use std::fmt;

/// Lifecycle of a [`MoeaRunner`](super::MoeaRunner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Built, no solution evaluated yet.
    Initialized,
    /// Population filled; each step applies one operator.
    Running,
    /// Finished; further steps do nothing.
    Terminated,
}

/// Why a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The evaluation budget was used up.
    MaxEvaluations,
    /// The termination predicate returned true.
    Predicate,
    /// The wall-clock limit passed.
    TimeLimit,
    /// The shared stop flag was set.
    Cancelled,
    /// [`terminate`](super::MoeaRunner::terminate) was called.
    Requested,
    /// A step failed.
    Error,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::MaxEvaluations => "evaluation budget exhausted",
            StopReason::Predicate => "termination condition met",
            StopReason::TimeLimit => "time limit reached",
            StopReason::Cancelled => "cancelled",
            StopReason::Requested => "terminated by caller",
            StopReason::Error => "error",
        };
        f.write_str(s)
    }
}

/// Outcome of [`MoeaRunner::run`](super::MoeaRunner::run).
#[derive(Debug, Clone)]
pub struct MoeaResult {
    /// Final population in (rank, crowding) order.
    pub population: Vec<Solution>,

    /// Feasible first-front members in lexicographic objective order.
    pub pareto_front: Vec<Solution>,

    /// Number of evaluated solutions.
    pub evaluations: usize,

    /// Number of operator applications after initialization.
    pub generations: usize,

    /// Operator names, in roster order.
    pub operator_names: Vec<String>,

    /// Final operator selection probabilities, in roster order.
    pub operator_probabilities: Vec<f64>,

    /// Why the run stopped.
    pub stop_reason: StopReason,
}

/// Caller-supplied stop condition, checked after every step with the
/// population and the evaluation count.
pub type TerminationFn<'a> = Box<dyn Fn(&Population, usize) -> bool + 'a>;

/// Produces the solutions of the initial population.
///
/// Returned solutions need not be evaluated; the engine evaluates them.
pub trait Initialization {
    fn initialize(&self, problem: &dyn Problem, size: usize, rng: &mut dyn RngCore) -> Vec<Solution>;
}

/// Samples every variable uniformly from its domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInitialization;

impl Initialization for RandomInitialization {
    fn initialize(&self, problem: &dyn Problem, size: usize, rng: &mut dyn RngCore) -> Vec<Solution> {
        (0..size)
            .map(|_| {
                let mut solution = problem.new_solution();
                for variable in solution.variables_mut() {
                    variable.randomize(rng);
                }
                solution
            })
            .collect()
    }
}

/// Starts from caller-supplied solutions, topped up with random ones.
///
/// Injected solutions are re-evaluated. Extra solutions beyond the
/// population size are ignored.
#[derive(Debug, Clone, Default)]
pub struct InjectedInitialization {
    solutions: Vec<Solution>,
}

impl InjectedInitialization {
    pub fn new(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }
}

impl Initialization for InjectedInitialization {
    fn initialize(&self, problem: &dyn Problem, size: usize, rng: &mut dyn RngCore) -> Vec<Solution> {
        let mut initial: Vec<Solution> = self
            .solutions
            .iter()
            .take(size)
            .map(Solution::copy_unevaluated)
            .collect();
        let missing = size - initial.len();
        initial.extend(RandomInitialization.initialize(problem, missing, rng));
        initial
    }
}
