// ============================================================================
// Solver Module
// Bracket search, bisection and the goal-seek entry points
// ============================================================================

mod bisector;
mod bracket_finder;
#[cfg(feature = "async")]
mod deadline;
mod equation_solver;
pub mod factory;

pub use bisector::Bisector;
pub use bracket_finder::BracketFinder;
#[cfg(feature = "async")]
pub use deadline::solve_with_timeout;
pub use equation_solver::{goal_seek, goal_seek_from, EquationSolver};
pub use factory::{create_from_config, EquationSolverBuilder};
