// ============================================================================
// Bisector
// Narrows a sign-change bracket to the requested precision
// ============================================================================

use super::bracket_finder::evaluate_at;
use crate::domain::{Bracket, EquationSpec, SolveError, SolverConfig, Status};
use crate::interfaces::{SolverEvent, SolverEventHandler};
use crate::numeric::DecimalValue;

/// Repeatedly halves a bracket until its endpoints agree to the precision of
/// the request.
pub struct Bisector<'s, F>
where
    F: Fn(&DecimalValue) -> DecimalValue,
{
    spec: &'s EquationSpec<F>,
    config: &'s SolverConfig,
    event_handler: &'s dyn SolverEventHandler,
    evaluations: u64,
}

impl<'s, F> Bisector<'s, F>
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

    /// Bisects `bracket`, returning the rounded root estimate and its status.
    ///
    /// - an exactly zero midpoint residual yields `ExactRoot`
    /// - endpoints equal at the precision yield the left endpoint, `Converged`
    /// - otherwise the last midpoint is returned as `NotConverged`
    ///
    /// # Errors
    /// `UndefinedResult` if the residual is undefined at a midpoint.
    pub fn bisect(&mut self, mut bracket: Bracket) -> Result<(DecimalValue, Status), SolveError> {
        let precision = self.spec.precision();
        let rounding = self.config.rounding;
        let mut mid = bracket.left().x.clone();

        for round in 1..=self.config.max_bisection_rounds {
            mid = bracket.midpoint();
            let point = evaluate_at(self.spec, mid.clone(), &mut self.evaluations)?;
            if point.is_root() {
                return Ok((mid.round(precision, rounding), Status::ExactRoot));
            }

            bracket.shrink(point);
            self.event_handler
                .on_event(&SolverEvent::BisectionRound { round, bracket: &bracket });

            let (left, right) = (&bracket.left().x, &bracket.right().x);
            if left.equal_to(right, precision) {
                return Ok((left.round(precision, rounding), Status::Converged));
            }
        }

        Ok((mid.round(precision, rounding), Status::NotConverged))
    }
}
