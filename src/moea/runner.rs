//! Evolutionary loop execution.
//!
//! [`MoeaRunner`] drives a steady-state loop: select operator and parents →
//! variation → evaluation → merge into the Pareto population → operator
//! credit → termination check.

use super::config::MoeaConfig;
use super::types::{
    Initialization, MoeaResult, RandomInitialization, RunState, StopReason, TerminationFn,
};
use crate::adaptive::{AdaptiveSelector, TournamentSelection};
use crate::error::{MoeaError, Result};
use crate::pareto::{lexicographic_cmp, Population};
use crate::problem::Problem;
use crate::random::create_rng;
use crate::solution::Solution;
use crate::variation::Variation;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Adaptive multi-operator evolutionary search over a [`Problem`].
///
/// The runner is a state machine (see [`RunState`]). The first
/// [`step`](MoeaRunner::step) fills and evaluates the initial population;
/// each later step applies one operator. The problem is closed exactly once,
/// when the run terminates for any reason.
///
/// # Usage
///
/// ```
/// use u_moea::error::Result;
/// use u_moea::moea::{MoeaConfig, MoeaRunner};
/// use u_moea::problem::Problem;
/// use u_moea::solution::{Domain, Solution};
/// use u_moea::variation::{Compound, Pm, Sbx, Variation};
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
///
/// let problem = Schaffer { domains: vec![Domain::real(-10.0, 10.0)] };
/// let roster: Vec<Box<dyn Variation>> = vec![
///     Box::new(Compound::new(Sbx::default(), Pm::default())?),
///     Box::new(Pm::default()),
/// ];
/// let config = MoeaConfig::default()
///     .with_population_size(20)
///     .with_max_evaluations(500)
///     .with_seed(42);
///
/// let result = MoeaRunner::new(&problem, roster, config)?.run()?;
/// assert!(result.evaluations >= 500);
/// assert!(!result.pareto_front.is_empty());
/// # Ok::<(), u_moea::error::MoeaError>(())
/// ```
pub struct MoeaRunner<'a, P: Problem> {
    problem: &'a P,
    config: MoeaConfig,
    selector: AdaptiveSelector,
    population: Population,
    initialization: Box<dyn Initialization + 'a>,
    termination: Option<TerminationFn<'a>>,
    rng: StdRng,
    state: RunState,
    stop_reason: Option<StopReason>,
    evaluations: usize,
    generations: usize,
    stop: Arc<AtomicBool>,
    started: Option<Instant>,
}

impl<'a, P: Problem> MoeaRunner<'a, P> {
    /// Builds a runner for `problem` with the given operator roster.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid, the roster is
    /// empty or holds an operator with zero arity, or the problem declares
    /// no variables, no objectives, or an empty variable domain.
    pub fn new(
        problem: &'a P,
        operators: Vec<Box<dyn Variation>>,
        config: MoeaConfig,
    ) -> Result<Self> {
        config.validate()?;
        if problem.num_variables() == 0 {
            return Err(MoeaError::config(format!(
                "problem `{}` declares no variables",
                problem.name()
            )));
        }
        if problem.num_objectives() == 0 {
            return Err(MoeaError::config(format!(
                "problem `{}` declares no objectives",
                problem.name()
            )));
        }

        for (i, domain) in problem.domains().iter().enumerate() {
            domain.validate().map_err(|e| {
                MoeaError::config(format!("problem `{}`, variable {i}: {e}", problem.name()))
            })?;
        }

        let selector = AdaptiveSelector::new(
            operators,
            config.adaptive.clone(),
            TournamentSelection::new(config.tournament_size),
        )?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        Ok(Self {
            problem,
            population: Population::new(config.population_size),
            config,
            selector,
            initialization: Box::new(RandomInitialization),
            termination: None,
            rng,
            state: RunState::Initialized,
            stop_reason: None,
            evaluations: 0,
            generations: 0,
            stop: Arc::new(AtomicBool::new(false)),
            started: None,
        })
    }

    /// Replaces the initialization policy (uniform random by default).
    pub fn with_initialization(mut self, initialization: impl Initialization + 'a) -> Self {
        self.initialization = Box::new(initialization);
        self
    }

    /// Adds a stop condition evaluated after every step.
    pub fn with_termination<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Population, usize) -> bool + 'a,
    {
        self.termination = Some(Box::new(condition));
        self
    }

    /// Shares an external stop flag, checked once per step.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    /// Handle to the stop flag; storing `true` ends the run at the next
    /// step boundary.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of evaluated solutions so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of operator applications so far.
    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == RunState::Terminated
    }

    /// Why the run terminated, once it has.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Current operator selection probabilities, in roster order.
    pub fn operator_probabilities(&self) -> Vec<f64> {
        self.selector.probabilities()
    }

    /// Operator names, in roster order.
    pub fn operator_names(&self) -> Vec<&str> {
        self.selector.names()
    }

    /// Feasible first-front members in lexicographic objective order.
    pub fn pareto_front(&self) -> Vec<Solution> {
        let mut front: Vec<Solution> = self
            .population
            .front(0)
            .filter(|s| s.is_feasible())
            .cloned()
            .collect();
        front.sort_by(lexicographic_cmp);
        front
    }

    /// Advances the run by one step.
    ///
    /// Does nothing once the run has terminated.
    ///
    /// # Errors
    ///
    /// Any error from variation or evaluation terminates the run, closes
    /// the problem, and is returned. The population is left as it was
    /// before the failing step.
    pub fn step(&mut self) -> Result<()> {
        let outcome = match self.state {
            RunState::Terminated => return Ok(()),
            RunState::Initialized => {
                self.started = Some(Instant::now());
                self.initialize()
            }
            RunState::Running => match self.check_termination() {
                Some(reason) => return self.finish(reason),
                None => self.iterate(),
            },
        };

        if let Err(err) = outcome {
            self.abort(&err);
            return Err(err);
        }
        self.state = RunState::Running;

        match self.check_termination() {
            Some(reason) => self.finish(reason),
            None => Ok(()),
        }
    }

    /// Steps until the run terminates and returns the outcome.
    pub fn run(&mut self) -> Result<MoeaResult> {
        while !self.is_terminated() {
            self.step()?;
        }
        Ok(self.result())
    }

    /// Ends the run now and closes the problem.
    ///
    /// Does nothing if the run has already terminated.
    pub fn terminate(&mut self) -> Result<()> {
        if self.is_terminated() {
            return Ok(());
        }
        self.finish(StopReason::Requested)
    }

    /// Snapshot of the run.
    pub fn result(&self) -> MoeaResult {
        MoeaResult {
            population: self.population.solutions().to_vec(),
            pareto_front: self.pareto_front(),
            evaluations: self.evaluations,
            generations: self.generations,
            operator_names: self.selector.names().into_iter().map(String::from).collect(),
            operator_probabilities: self.selector.probabilities(),
            stop_reason: self.stop_reason.unwrap_or(StopReason::Requested),
        }
    }

    fn initialize(&mut self) -> Result<()> {
        let size = self.config.population_size;
        let mut initial = self
            .initialization
            .initialize(self.problem, size, &mut self.rng);
        if initial.len() != size {
            return Err(MoeaError::config(format!(
                "initialization produced {} solutions, expected {size}",
                initial.len()
            )));
        }
        self.check_shape(&initial, "initial solution")?;

        evaluate_all(self.problem, &mut initial, self.config.parallel)?;
        self.evaluations += initial.len();
        self.population.merge(initial)?;

        log::debug!(
            "initialized population of {} for `{}`",
            self.population.len(),
            self.problem.name()
        );
        Ok(())
    }

    fn iterate(&mut self) -> Result<()> {
        let (index, parents) = self.selector.select(&self.population, &mut self.rng);
        let operator = self.selector.operator(index);
        let mut offspring = operator.evolve(&parents, &mut self.rng);
        if offspring.len() != operator.offspring() {
            return Err(MoeaError::config(format!(
                "operator `{}` returned {} offspring, declared {}",
                operator.name(),
                offspring.len(),
                operator.offspring()
            )));
        }
        self.check_shape(&offspring, "offspring")?;

        evaluate_all(self.problem, &mut offspring, self.config.parallel)?;
        self.evaluations += offspring.len();
        self.generations += 1;

        let outcome = self.population.merge(offspring)?;
        self.selector.record(index, outcome.ranks());
        Ok(())
    }

    fn check_shape(&self, solutions: &[Solution], what: &str) -> Result<()> {
        let problem = self.problem;
        for (i, s) in solutions.iter().enumerate() {
            if s.num_variables() != problem.num_variables()
                || s.num_objectives() != problem.num_objectives()
                || s.num_constraints() != problem.num_constraints()
            {
                return Err(MoeaError::config(format!(
                    "{what} {i} has shape ({}, {}, {}), problem `{}` expects ({}, {}, {})",
                    s.num_variables(),
                    s.num_objectives(),
                    s.num_constraints(),
                    problem.name(),
                    problem.num_variables(),
                    problem.num_objectives(),
                    problem.num_constraints()
                )));
            }
        }
        Ok(())
    }

    fn check_termination(&self) -> Option<StopReason> {
        if self.stop.load(Ordering::Relaxed) {
            return Some(StopReason::Cancelled);
        }
        if self.evaluations >= self.config.max_evaluations {
            return Some(StopReason::MaxEvaluations);
        }
        if let (Some(limit), Some(started)) = (self.config.time_limit_ms, self.started) {
            if started.elapsed() >= Duration::from_millis(limit) {
                return Some(StopReason::TimeLimit);
            }
        }
        if let Some(condition) = &self.termination {
            if condition(&self.population, self.evaluations) {
                return Some(StopReason::Predicate);
            }
        }
        None
    }

    fn finish(&mut self, reason: StopReason) -> Result<()> {
        self.state = RunState::Terminated;
        self.stop_reason = Some(reason);
        log::info!(
            "`{}` terminated ({reason}) after {} evaluations, {} generations",
            self.problem.name(),
            self.evaluations,
            self.generations
        );
        self.problem.close()
    }

    fn abort(&mut self, err: &MoeaError) {
        self.state = RunState::Terminated;
        self.stop_reason = Some(StopReason::Error);
        log::info!(
            "`{}` terminated after {} evaluations: {err}",
            self.problem.name(),
            self.evaluations
        );
        if let Err(close_err) = self.problem.close() {
            log::warn!("failed to close `{}`: {close_err}", self.problem.name());
        }
    }
}

/// Evaluates every solution, stopping at the first error.
fn evaluate_all<P: Problem>(problem: &P, solutions: &mut [Solution], parallel: bool) -> Result<()> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return solutions
                .par_iter_mut()
                .try_for_each(|s| problem.evaluate(s));
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    solutions.iter_mut().try_for_each(|s| problem.evaluate(s))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::AdaptiveConfig;
    use crate::moea::InjectedInitialization;
    use crate::solution::Domain;
    use crate::variation::{Compound, DifferentialEvolution, Pm, Sbx, Spx, Um};
    use rand::RngCore;
    use std::sync::atomic::AtomicUsize;

    // ---- Schaffer N.1: f1 = x², f2 = (x - 2)², Pareto set x ∈ [0, 2] ----

    struct Schaffer {
        domains: Vec<Domain>,
        closed: AtomicUsize,
    }

    impl Schaffer {
        fn new() -> Self {
            Self {
                domains: vec![Domain::real(-10.0, 10.0)],
                closed: AtomicUsize::new(0),
            }
        }
    }

    impl Problem for Schaffer {
        fn name(&self) -> &str {
            "schaffer"
        }

        fn domains(&self) -> &[Domain] {
            &self.domains
        }

        fn num_objectives(&self) -> usize {
            2
        }

        fn evaluate(&self, solution: &mut Solution) -> Result<()> {
            let x = solution.variables()[0].as_real().unwrap_or(0.0);
            solution.set_evaluation(&[x * x, (x - 2.0) * (x - 2.0)], &[])
        }

        fn close(&self) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    // ---- Fails after a fixed number of evaluations ----

    struct Flaky {
        domains: Vec<Domain>,
        remaining: AtomicUsize,
        closed: AtomicUsize,
    }

    impl Problem for Flaky {
        fn domains(&self) -> &[Domain] {
            &self.domains
        }

        fn num_objectives(&self) -> usize {
            1
        }

        fn evaluate(&self, solution: &mut Solution) -> Result<()> {
            let left = self.remaining.fetch_sub(1, Ordering::SeqCst);
            if left == 0 {
                self.remaining.store(0, Ordering::SeqCst);
                return Err(MoeaError::ChannelClosed);
            }
            let x = solution.variables()[0].as_real().unwrap_or(0.0);
            solution.set_evaluation(&[x], &[])
        }

        fn close(&self) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Returns one child too many.
    struct Greedy;

    impl Variation for Greedy {
        fn name(&self) -> &str {
            "greedy"
        }

        fn arity(&self) -> usize {
            1
        }

        fn offspring(&self) -> usize {
            1
        }

        fn evolve(&self, parents: &[Solution], _rng: &mut dyn RngCore) -> Vec<Solution> {
            vec![parents[0].copy_unevaluated(), parents[0].copy_unevaluated()]
        }
    }

    fn roster() -> Vec<Box<dyn Variation>> {
        vec![
            Box::new(Compound::new(Sbx::default(), Pm::default()).unwrap()),
            Box::new(Compound::new(DifferentialEvolution::default(), Pm::default()).unwrap()),
            Box::new(Compound::new(Spx::default(), Pm::default()).unwrap()),
            Box::new(Um::default()),
        ]
    }

    fn config() -> MoeaConfig {
        MoeaConfig::default()
            .with_population_size(20)
            .with_max_evaluations(2000)
            .with_adaptive(AdaptiveConfig::default().with_update_interval(50))
            .with_parallel(false)
            .with_seed(42)
    }

    #[test]
    fn test_schaffer_convergence() {
        let problem = Schaffer::new();
        let result = MoeaRunner::new(&problem, roster(), config())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(result.stop_reason, StopReason::MaxEvaluations);
        assert!(result.evaluations >= 2000);
        assert_eq!(result.population.len(), 20);
        assert!(!result.pareto_front.is_empty());
        for s in &result.pareto_front {
            let x = s.variables()[0].as_real().unwrap();
            assert!((-0.1..=2.1).contains(&x), "front member at x = {x}");
        }
        for pair in result.pareto_front.windows(2) {
            assert!(pair[0].objectives()[0] <= pair[1].objectives()[0]);
        }
        assert!((result.operator_probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert_eq!(result.operator_names, vec!["sbx+pm", "de+pm", "spx+pm", "um"]);
        assert_eq!(problem.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_state_machine() {
        let problem = Schaffer::new();
        let mut runner = MoeaRunner::new(&problem, roster(), config()).unwrap();
        assert_eq!(runner.state(), RunState::Initialized);
        assert!(runner.population().is_empty());

        runner.step().unwrap();
        assert_eq!(runner.state(), RunState::Running);
        assert_eq!(runner.population().len(), 20);
        assert_eq!(runner.evaluations(), 20);
        assert_eq!(runner.generations(), 0);

        runner.step().unwrap();
        assert_eq!(runner.generations(), 1);
        assert!(runner.evaluations() > 20);
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let problem = Schaffer::new();
        let mut runner = MoeaRunner::new(&problem, roster(), config()).unwrap();
        runner.step().unwrap();
        runner.step().unwrap();
        runner.terminate().unwrap();
        assert!(runner.is_terminated());
        assert_eq!(runner.stop_reason(), Some(StopReason::Requested));

        let evaluations = runner.evaluations();
        let before: Vec<Vec<f64>> = runner
            .population()
            .iter()
            .map(|s| s.objectives().to_vec())
            .collect();

        for _ in 0..5 {
            runner.step().unwrap();
        }
        runner.terminate().unwrap();

        let after: Vec<Vec<f64>> = runner
            .population()
            .iter()
            .map(|s| s.objectives().to_vec())
            .collect();
        assert_eq!(runner.evaluations(), evaluations);
        assert_eq!(before, after);
        assert_eq!(problem.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_budget_smaller_than_population() {
        let problem = Schaffer::new();
        let config = config().with_max_evaluations(5);
        let mut runner = MoeaRunner::new(&problem, roster(), config).unwrap();
        runner.step().unwrap();
        assert!(runner.is_terminated());
        assert_eq!(runner.stop_reason(), Some(StopReason::MaxEvaluations));
        assert_eq!(runner.evaluations(), 20);
    }

    #[test]
    fn test_stop_flag() {
        let problem = Schaffer::new();
        let mut runner = MoeaRunner::new(&problem, roster(), config()).unwrap();
        let stop = runner.stop_handle();
        runner.step().unwrap();
        runner.step().unwrap();

        stop.store(true, Ordering::Relaxed);
        let generations = runner.generations();
        runner.step().unwrap();
        assert!(runner.is_terminated());
        assert_eq!(runner.generations(), generations);
        assert_eq!(runner.stop_reason(), Some(StopReason::Cancelled));
    }

    #[test]
    fn test_cancellation_from_thread() {
        let problem = Schaffer::new();
        let config = config().with_max_evaluations(usize::MAX);
        let stop = Arc::new(AtomicBool::new(false));
        let mut runner = MoeaRunner::new(&problem, roster(), config)
            .unwrap()
            .with_stop_flag(Arc::clone(&stop));

        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            stop.store(true, Ordering::Relaxed);
        });
        let result = runner.run().unwrap();
        handle.join().unwrap();

        assert_eq!(result.stop_reason, StopReason::Cancelled);
    }

    #[test]
    fn test_time_limit() {
        let problem = Schaffer::new();
        let config = config()
            .with_max_evaluations(usize::MAX)
            .with_time_limit_ms(30);
        let result = MoeaRunner::new(&problem, roster(), config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.stop_reason, StopReason::TimeLimit);
    }

    #[test]
    fn test_termination_predicate() {
        let problem = Schaffer::new();
        let mut runner = MoeaRunner::new(&problem, roster(), config())
            .unwrap()
            .with_termination(|_, evaluations| evaluations >= 100);
        let result = runner.run().unwrap();

        assert_eq!(result.stop_reason, StopReason::Predicate);
        assert!(result.evaluations >= 100 && result.evaluations < 110);
    }

    #[test]
    fn test_evaluation_error_aborts() {
        let problem = Flaky {
            domains: vec![Domain::real(0.0, 1.0)],
            remaining: AtomicUsize::new(25),
            closed: AtomicUsize::new(0),
        };
        let mut runner = MoeaRunner::new(&problem, roster(), config()).unwrap();
        let err = runner.run().unwrap_err();

        assert!(matches!(err, MoeaError::ChannelClosed));
        assert!(runner.is_terminated());
        assert_eq!(runner.stop_reason(), Some(StopReason::Error));
        assert_eq!(problem.closed.load(Ordering::SeqCst), 1);
        // Only whole batches count; the failing batch never reached the population.
        assert!(runner.evaluations() <= 25);
        assert_eq!(runner.population().len(), 20);

        runner.step().unwrap();
        assert_eq!(problem.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_initial_evaluation_error_leaves_population_empty() {
        let problem = Flaky {
            domains: vec![Domain::real(0.0, 1.0)],
            remaining: AtomicUsize::new(5),
            closed: AtomicUsize::new(0),
        };
        let mut runner = MoeaRunner::new(&problem, roster(), config()).unwrap();
        assert!(runner.step().is_err());
        assert!(runner.population().is_empty());
        assert_eq!(runner.evaluations(), 0);
    }

    #[test]
    fn test_offspring_count_mismatch() {
        let problem = Schaffer::new();
        let mut runner = MoeaRunner::new(&problem, vec![Box::new(Greedy)], config()).unwrap();
        runner.step().unwrap();
        let err = runner.step().unwrap_err();
        assert!(matches!(err, MoeaError::Config(ref m) if m.contains("greedy")));
        assert!(runner.is_terminated());
    }

    #[test]
    fn test_single_operator_probability_one() {
        let problem = Schaffer::new();
        let config = config()
            .with_max_evaluations(400)
            .with_adaptive(AdaptiveConfig::default().with_update_interval(10));
        let mut runner = MoeaRunner::new(&problem, vec![Box::new(Um::default())], config).unwrap();
        let result = runner.run().unwrap();
        assert_eq!(result.operator_probabilities, vec![1.0]);
    }

    #[test]
    fn test_injected_initialization() {
        let problem = Schaffer::new();
        let mut seed = problem.new_solution();
        seed.variables_mut()[0].set_real(1.0);

        let mut runner = MoeaRunner::new(&problem, roster(), config())
            .unwrap()
            .with_initialization(InjectedInitialization::new(vec![seed]));
        runner.step().unwrap();

        assert!(runner
            .population()
            .iter()
            .any(|s| s.variables()[0].as_real() == Some(1.0)));
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = || {
            let problem = Schaffer::new();
            let result = MoeaRunner::new(&problem, roster(), config().with_max_evaluations(500))
                .unwrap()
                .run()
                .unwrap();
            result
                .population
                .iter()
                .map(|s| s.objectives().to_vec())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_domain_rejected() {
        struct Empty {
            domains: Vec<Domain>,
        }

        impl Problem for Empty {
            fn domains(&self) -> &[Domain] {
                &self.domains
            }

            fn num_objectives(&self) -> usize {
                1
            }

            fn evaluate(&self, solution: &mut Solution) -> Result<()> {
                solution.set_evaluation(&[0.0], &[])
            }
        }

        for domain in [Domain::integer(3, 1), Domain::categorical(0)] {
            let problem = Empty {
                domains: vec![Domain::real(0.0, 1.0), domain],
            };
            let err = MoeaRunner::new(&problem, vec![Box::new(Um::default())], config()).err().expect("expected error");
            assert!(matches!(err, MoeaError::Config(ref m) if m.contains("variable 1")));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = Schaffer::new();
        assert!(MoeaRunner::new(&problem, roster(), config().with_population_size(0)).is_err());
        assert!(MoeaRunner::new(&problem, vec![], config()).is_err());
    }
}
