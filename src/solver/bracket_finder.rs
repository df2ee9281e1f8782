// ============================================================================
// Bracket Finder
// Locates a sign change of the residual by sweeping or expanding outwards
// ============================================================================

use crate::domain::{Bracket, EquationSpec, Point, SolveError, SolverConfig};
use crate::interfaces::{AbortReason, SolverEvent, SolverEventHandler};
use crate::numeric::constants::{HALF, MAX_MAGNITUDE, MIN_MAGNITUDE, ONE_TENTH, TEN};
use crate::numeric::{DecimalValue, Sign};

/// Evaluates the residual at `x`, counting the evaluation.
///
/// # Errors
/// `SolveError::UndefinedResult` if the residual is undefined.
pub(super) fn evaluate_at<F>(
    spec: &EquationSpec<F>,
    x: DecimalValue,
    evaluations: &mut u64,
) -> Result<Point, SolveError>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    *evaluations += 1;
    let point = spec.evaluate(x);
    if point.residual.is_undefined() {
        return Err(SolveError::UndefinedResult { x: point.x });
    }
    Ok(point)
}

/// True if `point` ends a step that started with residual sign `start`.
fn crosses(start: Option<Sign>, point: &Point) -> bool {
    point.is_root() || point.sign() != start
}

/// Finds an interval over which the residual changes sign.
///
/// Callers must have checked the starting points for exact roots first.
pub struct BracketFinder<'s, F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    spec: &'s EquationSpec<F>,
    config: &'s SolverConfig,
    event_handler: &'s dyn SolverEventHandler,
    evaluations: u64,
}

impl<'s, F> BracketFinder<'s, F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    pub fn new(
        spec: &'s EquationSpec<F>,
        config: &'s SolverConfig,
        event_handler: &'s dyn SolverEventHandler,
    ) -> Self {
        Self {
            spec,
            config,
            event_handler,
            evaluations: 0,
        }
    }

    /// Function evaluations spent so far
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn evaluate_at(&mut self, x: DecimalValue) -> Result<Point, SolveError> {
        evaluate_at(self.spec, x, &mut self.evaluations)
    }

    fn abort(&self, reason: AbortReason) -> SolveError {
        self.event_handler
            .on_event(&SolverEvent::BracketSearchAborted { reason });
        SolveError::NoBracketFound
    }

    // ========================================================================
    // Bounded Sweep
    // ========================================================================

    /// Sweeps `[min, max]` with a shrinking increment.
    ///
    /// `start` and `end` are the already evaluated domain endpoints. The first
    /// pass compares them directly; every later pass halves the increment and
    /// only evaluates the points it adds, since all earlier points share the
    /// sign of `start`.
    ///
    /// # Errors
    /// - `NoBracketFound` on a zero-width domain, a locally flat residual, or
    ///   when the sweep cap is reached
    /// - `UndefinedResult` if the residual is undefined at a scan point
    pub fn sweep(&mut self, start: &Point, end: &Point) -> Result<Bracket, SolveError> {
        for point in [start, end] {
            if point.residual.is_undefined() {
                return Err(SolveError::UndefinedResult { x: point.x.clone() });
            }
        }

        let mut increment = &end.x - &start.x;
        if increment.is_zero() {
            return Err(self.abort(AbortReason::ZeroWidth));
        }

        let start_sign = start.sign();
        let precision = self.spec.precision();

        self.event_handler.on_event(&SolverEvent::SweepStarted {
            sweep: 0,
            increment: &increment,
        });
        if crosses(start_sign, end) {
            return self.bracket(start.clone(), end.clone());
        }

        // Left point of the most recently compared pair; the right is `end`
        let mut last = start.clone();
        let mut sweep: u32 = 0;

        loop {
            if last.x.equal_to(&end.x, precision) && last.residual.equal_to(&end.residual, precision) {
                return Err(self.abort(AbortReason::LocallyFlat));
            }
            if sweep >= self.config.max_sweeps {
                return Err(self.abort(AbortReason::SweepLimit));
            }

            sweep += 1;
            increment = &increment * &*HALF;
            self.event_handler.on_event(&SolverEvent::SweepStarted {
                sweep,
                increment: &increment,
            });

            let step = &increment + &increment;
            let mut x = &start.x + &increment;
            while x < end.x {
                let point = self.evaluate_at(x.clone())?;
                if crosses(start_sign, &point) {
                    let left_x = &x - &increment;
                    let left = if left_x == start.x {
                        start.clone()
                    } else {
                        self.evaluate_at(left_x)?
                    };
                    return self.bracket(left, point);
                }
                last = point;
                x = &x + &step;
            }
        }
    }

    // ========================================================================
    // Unbounded Expansion
    // ========================================================================

    /// Evaluates `initial ± i` for i = 0.1, 1, 10, ... until a residual's
    /// sign differs from that of `initial`.
    ///
    /// The search stops once both trial points lie outside `[-u64::MAX, u64::MAX]`.
    ///
    /// # Errors
    /// - `NoBracketFound` when the search range is exhausted
    /// - `UndefinedResult` if the residual is undefined at a trial point
    pub fn expand_from(&mut self, initial: &Point) -> Result<Bracket, SolveError> {
        if initial.residual.is_undefined() {
            return Err(SolveError::UndefinedResult { x: initial.x.clone() });
        }

        let start_sign = initial.sign();
        let mut step = ONE_TENTH.clone();
        let mut left_x = initial.x.clone();
        let mut right_x = initial.x.clone();
        let mut round: u32 = 0;

        while *MIN_MAGNITUDE < left_x || right_x < *MAX_MAGNITUDE {
            self.event_handler.on_event(&SolverEvent::SweepStarted {
                sweep: round,
                increment: &step,
            });

            right_x = &initial.x + &step;
            let right = self.evaluate_at(right_x.clone())?;
            if crosses(start_sign, &right) {
                return self.bracket(initial.clone(), right);
            }

            left_x = &initial.x - &step;
            let left = self.evaluate_at(left_x.clone())?;
            if crosses(start_sign, &left) {
                return self.bracket(left, initial.clone());
            }

            step = &step * &*TEN;
            round += 1;
        }

        Err(self.abort(AbortReason::RangeExhausted))
    }

    fn bracket(&self, a: Point, b: Point) -> Result<Bracket, SolveError> {
        let bracket = Bracket::new(a, b).ok_or(SolveError::NoBracketFound)?;
        self.event_handler
            .on_event(&SolverEvent::BracketFound { bracket: &bracket });
        Ok(bracket)
    }
}
