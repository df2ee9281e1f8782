// ============================================================================
// Decimal Goal Seek Library
// Arbitrary-precision decimals with explicit rounding and an equation solver
// ============================================================================

//! # Decimal Goal Seek
//!
//! Immutable arbitrary-precision decimal values for money-like quantities,
//! and a goal-seek solver that finds an input producing a target output.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** backed by `bigdecimal`, with an explicit
//!   undefined (NaN) state instead of panics
//! - **Pure rounding** to significant figures or decimal places under six
//!   rounding modes
//! - **Bracketing goal seek** over a bounded domain or outwards from an
//!   initial guess, narrowed by bisection
//! - **Finance formulas** for rate conversion, compound growth, annuities
//!   and inflation
//! - **Observable progress** through pluggable event handlers and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use decimal_goalseek::prelude::*;
//!
//! // Which rate doubles 1000 after 10 compounding periods?
//! let (rate, found) = goal_seek(
//!     DecimalValue::zero(),
//!     DecimalValue::one(),
//!     DecimalValue::from_integer(2000),
//!     4,
//!     |r: &DecimalValue| DecimalValue::from_integer(1000) * r.add_int(1).pow_int(10),
//! );
//!
//! assert!(found);
//! assert_eq!(format!("{:.3}", rate.as_percent()), "7.177%");
//! ```

pub mod domain;
pub mod finance;
pub mod interfaces;
pub mod numeric;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Bracket, EquationSpec, Point, SolveError, Solution, SolverConfig, Status,
    };
    pub use crate::finance::{
        deflate, effective_to_nominal_rate, effective_to_periodic_rate, future_value,
        future_value_annuity_due, future_value_ordinary_annuity, nominal_to_effective_rate,
        nominal_to_real_rate, real_to_nominal_rate, recompound_rate,
    };
    pub use crate::interfaces::{
        AbortReason, LoggingEventHandler, NoOpEventHandler, SolverEvent, SolverEventHandler,
    };
    pub use crate::numeric::{DecimalValue, NumericError, NumericResult, RoundingMode, Sign};
    pub use crate::solver::{goal_seek, goal_seek_from, EquationSolver, EquationSolverBuilder};

    #[cfg(feature = "async")]
    pub use crate::solver::solve_with_timeout;
}
