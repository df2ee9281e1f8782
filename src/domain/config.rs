// ============================================================================
// Solver Configuration
// Work limits and result rounding for the goal-seek solver
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cap on bisection rounds.
pub const DEFAULT_MAX_BISECTION_ROUNDS: u32 = 1000;

/// Default cap on sweep halvings during bracket search.
pub const DEFAULT_MAX_SWEEPS: u32 = 20;

/// Configuration for an [`EquationSolver`](crate::solver::EquationSolver)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Maximum bisection rounds before giving up with the last midpoint.
    /// Zero skips bisection entirely.
    pub max_bisection_rounds: u32,

    /// Maximum number of times the bounded sweep halves its increment.
    /// Bounds the work spent on functions that never change sign.
    pub max_sweeps: u32,

    /// Rounding applied to the reported root
    pub rounding: RoundingMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_bisection_rounds: DEFAULT_MAX_BISECTION_ROUNDS,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            rounding: RoundingMode::NearestEven,
        }
    }
}

impl SolverConfig {
    /// Builder method: Set the bisection round cap
    pub fn with_max_bisection_rounds(mut self, rounds: u32) -> Self {
        self.max_bisection_rounds = rounds;
        self
    }

    /// Builder method: Set the sweep halving cap
    pub fn with_max_sweeps(mut self, sweeps: u32) -> Self {
        self.max_sweeps = sweeps;
        self
    }

    /// Builder method: Set the result rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sweeps == 0 {
            return Err("Max sweeps must be at least 1".to_string());
        }

        Ok(())
    }
}
