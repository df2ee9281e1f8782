// ============================================================================
// Equation Solver
// Goal seek: endpoint checks, bracket search, then bisection
// ============================================================================

use super::bisector::Bisector;
use super::bracket_finder::{evaluate_at, BracketFinder};
use crate::domain::{Bracket, EquationSpec, Point, SolveError, Solution, SolverConfig, Status};
use crate::interfaces::{NoOpEventHandler, SolverEvent, SolverEventHandler};
use crate::numeric::constants::{MAX_MAGNITUDE, MIN_MAGNITUDE};
use crate::numeric::DecimalValue;
use std::fmt;
use std::sync::Arc;

/// Finds x such that `f(x) == target` to a number of significant figures.
///
/// The solver is stateless between calls and can be shared across threads.
///
/// # Example
/// ```
/// use decimal_goalseek::prelude::*;
///
/// let solver = EquationSolver::default();
/// // x^2 - 2x = 1 has its first root near -0.414
/// let solution = solver.solve(
///     DecimalValue::from_integer(-10),
///     DecimalValue::from_integer(10),
///     DecimalValue::one(),
///     3,
///     |x: &DecimalValue| &(x * x) - &x.mul_int(2),
/// );
///
/// assert!(solution.found());
/// assert_eq!(solution.value, DecimalValue::permille(-414));
/// ```
#[derive(Clone)]
pub struct EquationSolver {
    /// Work limits and result rounding
    config: SolverConfig,

    /// Event handler for solver progress
    event_handler: Arc<dyn SolverEventHandler>,
}

impl EquationSolver {
    /// Create a new solver
    pub fn new(config: SolverConfig, event_handler: Arc<dyn SolverEventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `f(x) == target` for x in `[min, max]`.
    ///
    /// The domain may be given in either order. When no root is found the
    /// solution carries zero as its fallback value.
    pub fn solve<F>(
        &self,
        min: DecimalValue,
        max: DecimalValue,
        target: DecimalValue,
        precision: u32,
        f: F,
    ) -> Solution
    where
        F: Fn(&DecimalValue) -> DecimalValue,
    {
        self.solve_spec(&EquationSpec::new(min, max, target, precision, f))
    }

    /// Solves a prepared request over its bounded domain.
    pub fn solve_spec<F>(&self, spec: &EquationSpec<F>) -> Solution
    where
        F: Fn(&DecimalValue) -> DecimalValue,
    {
        let mut evaluations = 0;

        let start = match evaluate_at(spec, spec.min().clone(), &mut evaluations) {
            Ok(point) => point,
            Err(err) => return self.fail(err, DecimalValue::zero(), evaluations),
        };
        if start.is_root() {
            return self.direct_hit(start, evaluations);
        }

        let end = match evaluate_at(spec, spec.max().clone(), &mut evaluations) {
            Ok(point) => point,
            Err(err) => return self.fail(err, DecimalValue::zero(), evaluations),
        };
        if end.is_root() {
            return self.direct_hit(end, evaluations);
        }

        let mut finder = BracketFinder::new(spec, &self.config, self.event_handler.as_ref());
        let found = finder.sweep(&start, &end);
        evaluations += finder.evaluations();

        match found {
            Ok(bracket) => self.narrow(spec, bracket, evaluations),
            Err(err) => self.fail(err, DecimalValue::zero(), evaluations),
        }
    }

    /// Solves `f(x) == target` searching outwards from `initial` over
    /// `[-u64::MAX, u64::MAX]`.
    ///
    /// When no root is found the solution carries `initial` as its fallback
    /// value.
    pub fn solve_from<F>(
        &self,
        initial: DecimalValue,
        target: DecimalValue,
        precision: u32,
        f: F,
    ) -> Solution
    where
        F: Fn(&DecimalValue) -> DecimalValue,
    {
        let spec = EquationSpec::new(
            MIN_MAGNITUDE.clone(),
            MAX_MAGNITUDE.clone(),
            target,
            precision,
            f,
        );
        let mut evaluations = 0;

        let start = match evaluate_at(&spec, initial.clone(), &mut evaluations) {
            Ok(point) => point,
            Err(err) => return self.fail(err, initial, evaluations),
        };
        if start.is_root() {
            return self.direct_hit(start, evaluations);
        }

        let mut finder = BracketFinder::new(&spec, &self.config, self.event_handler.as_ref());
        let found = finder.expand_from(&start);
        evaluations += finder.evaluations();

        match found {
            Ok(bracket) => self.narrow(&spec, bracket, evaluations),
            Err(err) => self.fail(err, initial, evaluations),
        }
    }

    // ========================================================================
    // Outcomes
    // ========================================================================

    fn narrow<F>(&self, spec: &EquationSpec<F>, bracket: Bracket, evaluations: u64) -> Solution
    where
        F: Fn(&DecimalValue) -> DecimalValue,
    {
        if let Some(root) = bracket.root_endpoint() {
            let value = root.x.clone();
            return self.finish(Solution::new(value, Status::ExactRoot, evaluations));
        }

        let mut bisector = Bisector::new(spec, &self.config, self.event_handler.as_ref());
        let outcome = bisector.bisect(bracket);
        let evaluations = evaluations + bisector.evaluations();

        match outcome {
            Ok((value, status)) => self.finish(Solution::new(value, status, evaluations)),
            Err(err) => self.fail(err, DecimalValue::zero(), evaluations),
        }
    }

    fn direct_hit(&self, point: Point, evaluations: u64) -> Solution {
        self.event_handler
            .on_event(&SolverEvent::DirectHit { x: &point.x });
        self.finish(Solution::new(point.x, Status::DirectHit, evaluations))
    }

    /// `fallback` is reported for a missing bracket; an undefined residual
    /// always falls back to zero.
    fn fail(&self, err: SolveError, fallback: DecimalValue, evaluations: u64) -> Solution {
        let solution = match err {
            SolveError::UndefinedResult { x } => {
                Solution::undefined(DecimalValue::zero(), x, evaluations)
            },
            _ => Solution::new(fallback, Status::NoBracketFound, evaluations),
        };
        self.finish(solution)
    }

    fn finish(&self, solution: Solution) -> Solution {
        tracing::debug!(
            status = ?solution.status,
            value = %solution.value,
            evaluations = solution.evaluations,
            "Goal seek completed"
        );
        self.event_handler.on_event(&SolverEvent::Finished {
            status: solution.status,
            value: &solution.value,
            evaluations: solution.evaluations,
        });
        solution
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default(), Arc::new(NoOpEventHandler))
    }
}

impl fmt::Debug for EquationSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquationSolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Goal Seek Functions
// ============================================================================

/// Finds x in `[min, max]` with `f(x) == target` to `precision` significant
/// figures using the default solver.
///
/// Returns the root and `true`, or the zero fallback and `false`.
///
/// # Example
/// ```
/// use decimal_goalseek::prelude::*;
///
/// let (x, found) = goal_seek(
///     DecimalValue::zero(),
///     DecimalValue::from_integer(10),
///     DecimalValue::from_integer(5),
///     3,
///     |x: &DecimalValue| x.clone(),
/// );
/// assert!(found);
/// assert_eq!(x, DecimalValue::from_integer(5));
/// ```
pub fn goal_seek<F>(
    min: DecimalValue,
    max: DecimalValue,
    target: DecimalValue,
    precision: u32,
    f: F,
) -> (DecimalValue, bool)
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    EquationSolver::default()
        .solve(min, max, target, precision, f)
        .into_pair()
}

/// Finds x with `f(x) == target` searching outwards from `initial`.
///
/// Returns the root and `true`, or `initial` and `false`.
pub fn goal_seek_from<F>(
    initial: DecimalValue,
    target: DecimalValue,
    precision: u32,
    f: F,
) -> (DecimalValue, bool)
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    EquationSolver::default()
        .solve_from(initial, target, precision, f)
        .into_pair()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records event names in arrival order
    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<&'static str>>,
    }

    impl SolverEventHandler for RecordingHandler {
        fn on_event(&self, event: &SolverEvent<'_>) {
            let name = match event {
                SolverEvent::DirectHit { .. } => "direct_hit",
                SolverEvent::SweepStarted { .. } => "sweep",
                SolverEvent::BracketFound { .. } => "bracket",
                SolverEvent::BracketSearchAborted { .. } => "aborted",
                SolverEvent::BisectionRound { .. } => "round",
                SolverEvent::Finished { .. } => "finished",
            };
            self.events.lock().unwrap().push(name);
        }
    }

    fn identity(x: &DecimalValue) -> DecimalValue {
        x.clone()
    }

    #[test]
    fn test_direct_hit_on_min() {
        let solution = EquationSolver::default().solve(
            DecimalValue::from_integer(5),
            DecimalValue::from_integer(20),
            DecimalValue::from_integer(5),
            3,
            identity,
        );

        assert_eq!(solution.status, Status::DirectHit);
        assert_eq!(solution.value, DecimalValue::from_integer(5));
        assert_eq!(solution.evaluations, 1);
    }

    #[test]
    fn test_direct_hit_on_max() {
        let solution = EquationSolver::default().solve(
            DecimalValue::zero(),
            DecimalValue::from_integer(5),
            DecimalValue::from_integer(5),
            3,
            identity,
        );

        assert_eq!(solution.status, Status::DirectHit);
        assert_eq!(solution.evaluations, 2);
    }

    #[test]
    fn test_exact_root_from_bracket_endpoint() {
        // The first halving lands exactly on 0
        let solution = EquationSolver::default().solve(
            DecimalValue::from_integer(-10),
            DecimalValue::from_integer(10),
            DecimalValue::zero(),
            3,
            |x: &DecimalValue| x * x,
        );

        assert_eq!(solution.status, Status::ExactRoot);
        assert!(solution.value.is_zero());
    }

    #[test]
    fn test_no_bracket_falls_back_to_zero() {
        let solution = EquationSolver::default().solve(
            DecimalValue::from_integer(-10),
            DecimalValue::from_integer(10),
            DecimalValue::from_integer(-1),
            3,
            |x: &DecimalValue| x * x,
        );

        assert_eq!(solution.status, Status::NoBracketFound);
        assert!(solution.value.is_zero());
        assert!(!solution.found());
    }

    #[test]
    fn test_undefined_function_value() {
        // 1/(x - 2) changes sign across its pole, which bisection hits exactly
        let solution = EquationSolver::default().solve(
            DecimalValue::from_integer(1),
            DecimalValue::from_integer(3),
            DecimalValue::zero(),
            3,
            |x: &DecimalValue| {
                DecimalValue::one()
                    .checked_div(&x.sub_int(2))
                    .unwrap_or_else(|_| DecimalValue::undefined())
            },
        );
        assert_eq!(solution.status, Status::UndefinedResult);
        assert!(solution.value.is_zero());
        assert_eq!(
            solution.into_result().unwrap_err(),
            SolveError::UndefinedResult { x: DecimalValue::from_integer(2) }
        );
    }

    #[test]
    fn test_solve_from_fallback_is_initial() {
        let solution = EquationSolver::default().solve_from(
            DecimalValue::new(1),
            DecimalValue::new(-1),
            3,
            |x: &DecimalValue| x.pow_int(2),
        );

        assert_eq!(solution.status, Status::NoBracketFound);
        assert_eq!(solution.value.to_string(), "1.00");
    }

    #[test]
    fn test_event_sequence() {
        let handler = Arc::new(RecordingHandler::default());
        let solver = EquationSolver::new(SolverConfig::default(), handler.clone());

        solver.solve(
            DecimalValue::zero(),
            DecimalValue::from_integer(10),
            DecimalValue::from_integer(5),
            3,
            identity,
        );

        let events = handler.events.lock().unwrap();
        // The first midpoint is the exact root, so no round completes
        assert_eq!(*events, vec!["sweep", "bracket", "finished"]);
    }

    #[test]
    fn test_abort_is_reported() {
        let handler = Arc::new(RecordingHandler::default());
        let solver = EquationSolver::new(SolverConfig::default().with_max_sweeps(1), handler.clone());

        solver.solve(
            DecimalValue::from_integer(-10),
            DecimalValue::from_integer(10),
            DecimalValue::from_integer(-1),
            3,
            |x: &DecimalValue| x * x,
        );

        let events = handler.events.lock().unwrap();
        assert_eq!(events.last(), Some(&"finished"));
        assert!(events.contains(&"aborted"));
    }
}
