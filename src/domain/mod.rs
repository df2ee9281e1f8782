// ============================================================================
// Domain Models Module
// Goal-seek requests, brackets, configuration and outcomes
// ============================================================================

pub mod bracket;
pub mod config;
pub mod equation;
pub mod solution;

pub use bracket::{Bracket, Point};
pub use config::SolverConfig;
pub use equation::EquationSpec;
pub use solution::{SolveError, Solution, Status};

// Residual sign shared with the numeric layer
pub use crate::numeric::Sign;
