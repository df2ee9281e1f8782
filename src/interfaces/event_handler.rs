// ============================================================================
// Event Handler Interface
// Defines the contract for observing goal-seek progress
// ============================================================================

use crate::domain::{Bracket, Status};
use crate::numeric::DecimalValue;
use std::fmt;

/// Why the bracket search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The last compared pair was equal in x and residual at the precision
    LocallyFlat,
    /// The configured sweep halving cap was reached
    SweepLimit,
    /// The domain has a single point
    ZeroWidth,
    /// Outward probing left the representable magnitude range
    RangeExhausted,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::LocallyFlat => write!(f, "locally flat"),
            AbortReason::SweepLimit => write!(f, "sweep limit reached"),
            AbortReason::ZeroWidth => write!(f, "zero-width domain"),
            AbortReason::RangeExhausted => write!(f, "search range exhausted"),
        }
    }
}

/// Events emitted by the equation solver.
///
/// Events borrow the solver's working values, so handlers that keep them
/// must clone.
#[derive(Debug, Clone, Copy)]
pub enum SolverEvent<'a> {
    /// A domain endpoint solved the equation without searching
    DirectHit { x: &'a DecimalValue },

    /// A bounded sweep pass is starting at the given increment
    SweepStarted { sweep: u32, increment: &'a DecimalValue },

    /// A sign change was located
    BracketFound { bracket: &'a Bracket },

    /// The bracket search gave up
    BracketSearchAborted { reason: AbortReason },

    /// A bisection round finished narrowing the bracket
    BisectionRound { round: u32, bracket: &'a Bracket },

    /// The solve completed
    Finished {
        status: Status,
        value: &'a DecimalValue,
        evaluations: u64,
    },
}

/// Event handler trait for observing solver progress
/// Implementations can handle logging, tracing, diagnostics, etc.
pub trait SolverEventHandler: Send + Sync {
    /// Handle a solver event
    fn on_event(&self, event: &SolverEvent<'_>);
}

/// No-op event handler (the default)
pub struct NoOpEventHandler;

impl SolverEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: &SolverEvent<'_>) {
        // Do nothing
    }
}

/// Logging event handler
///
/// Milestones go to `debug`, per-round progress to `trace`.
pub struct LoggingEventHandler;

impl SolverEventHandler for LoggingEventHandler {
    fn on_event(&self, event: &SolverEvent<'_>) {
        match event {
            SolverEvent::SweepStarted { sweep, increment } => {
                tracing::trace!(sweep, %increment, "Bracket sweep started");
            },
            SolverEvent::BisectionRound { round, bracket } => {
                tracing::trace!(
                    round,
                    left = %bracket.left().x,
                    right = %bracket.right().x,
                    "Bisection round"
                );
            },
            SolverEvent::Finished {
                status,
                value,
                evaluations,
            } => {
                tracing::debug!(?status, %value, evaluations, "Goal seek finished");
            },
            other => tracing::debug!("Goal seek event: {:?}", other),
        }
    }
}
