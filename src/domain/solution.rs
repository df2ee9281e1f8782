// ============================================================================
// Solution
// Outcome of a goal-seek run and its error form
// ============================================================================

use crate::numeric::DecimalValue;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a goal-seek run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A domain endpoint solves the equation exactly
    DirectHit,
    /// An evaluated point had an exactly zero residual
    ExactRoot,
    /// The bracket narrowed to the requested precision
    Converged,
    /// No sign change was found; the value is the fallback
    NoBracketFound,
    /// The bisection cap was reached; the value is the last midpoint
    NotConverged,
    /// The function produced an undefined value; the value is the fallback
    UndefinedResult,
}

impl Status {
    /// True for the statuses that report a root.
    #[inline]
    pub const fn is_found(self) -> bool {
        matches!(self, Status::DirectHit | Status::ExactRoot | Status::Converged)
    }
}

/// The result of a goal-seek run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Root estimate, or the fallback value when nothing was found
    pub value: DecimalValue,
    /// Final solver status
    pub status: Status,
    /// Number of times the function was evaluated
    pub evaluations: u64,
    /// The point whose evaluation was undefined, for `Status::UndefinedResult`
    pub undefined_at: Option<DecimalValue>,
}

impl Solution {
    pub(crate) fn new(value: DecimalValue, status: Status, evaluations: u64) -> Self {
        Self {
            value,
            status,
            evaluations,
            undefined_at: None,
        }
    }

    pub(crate) fn undefined(fallback: DecimalValue, x: DecimalValue, evaluations: u64) -> Self {
        Self {
            value: fallback,
            status: Status::UndefinedResult,
            evaluations,
            undefined_at: Some(x),
        }
    }

    /// True exactly when a root was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.status.is_found()
    }

    /// The `(value, found)` pair of the classic goal-seek interface.
    pub fn into_pair(self) -> (DecimalValue, bool) {
        let found = self.found();
        (self.value, found)
    }

    /// Converts failures into [`SolveError`].
    pub fn into_result(self) -> Result<DecimalValue, SolveError> {
        match self.status {
            Status::DirectHit | Status::ExactRoot | Status::Converged => Ok(self.value),
            Status::NoBracketFound => Err(SolveError::NoBracketFound),
            Status::NotConverged => Err(SolveError::NotConverged { last: self.value }),
            Status::UndefinedResult => Err(SolveError::UndefinedResult {
                x: self.undefined_at.unwrap_or_else(DecimalValue::undefined),
            }),
        }
    }
}

/// Errors reported by the goal-seek solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The function never changed sign over the searched domain
    NoBracketFound,
    /// Bisection stopped at its round cap
    NotConverged { last: DecimalValue },
    /// The function returned an undefined value at `x`
    UndefinedResult { x: DecimalValue },
    /// The deadline passed before the solver finished
    #[cfg(feature = "async")]
    TimedOut,
    /// The blocking solver task panicked or was cancelled
    #[cfg(feature = "async")]
    TaskFailed(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoBracketFound => write!(f, "no bracket found: function never changes sign"),
            SolveError::NotConverged { last } => {
                write!(f, "not converged: last midpoint {}", last)
            },
            SolveError::UndefinedResult { x } => {
                write!(f, "undefined result: function is undefined at {}", x)
            },
            #[cfg(feature = "async")]
            SolveError::TimedOut => write!(f, "timed out: solver deadline exceeded"),
            #[cfg(feature = "async")]
            SolveError::TaskFailed(reason) => write!(f, "solver task failed: {}", reason),
        }
    }
}

impl std::error::Error for SolveError {}
