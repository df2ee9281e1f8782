// ============================================================================
// Solver Factory
// Creates equation solvers with validated configuration
// ============================================================================

use super::EquationSolver;
use crate::domain::SolverConfig;
use crate::interfaces::{NoOpEventHandler, SolverEventHandler};
use crate::numeric::RoundingMode;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a solver from configuration
///
/// # Arguments
/// * `config` - Solver work limits and rounding
/// * `event_handler` - Event handler for solver progress
///
/// # Example
/// ```
/// use decimal_goalseek::prelude::*;
/// use decimal_goalseek::solver::create_from_config;
/// use std::sync::Arc;
///
/// let solver = create_from_config(SolverConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(solver.config().max_sweeps, 20);
/// ```
pub fn create_from_config(
    config: SolverConfig,
    event_handler: Arc<dyn SolverEventHandler>,
) -> Result<EquationSolver, String> {
    config.validate()?;
    Ok(EquationSolver::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating equation solvers with a fluent API
///
/// # Example
/// ```
/// use decimal_goalseek::prelude::*;
/// use std::sync::Arc;
///
/// let solver = EquationSolverBuilder::new()
///     .max_bisection_rounds(200)
///     .rounding(RoundingMode::TowardZero)
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// let (x, found) = solver
///     .solve(
///         DecimalValue::zero(),
///         DecimalValue::from_integer(4),
///         DecimalValue::from_integer(9),
///         3,
///         |x: &DecimalValue| x * x,
///     )
///     .into_pair();
/// assert!(found);
/// assert_eq!(x, DecimalValue::from_integer(3));
/// ```
pub struct EquationSolverBuilder {
    config: SolverConfig,
    event_handler: Arc<dyn SolverEventHandler>,
}

impl EquationSolverBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    // ========================================================================
    // Work Limits
    // ========================================================================

    /// Cap the number of bisection rounds
    pub fn max_bisection_rounds(mut self, rounds: u32) -> Self {
        self.config.max_bisection_rounds = rounds;
        self
    }

    /// Cap the number of sweep halvings in the bracket search
    pub fn max_sweeps(mut self, sweeps: u32) -> Self {
        self.config.max_sweeps = sweeps;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the rounding mode of the reported root
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Set the progress event handler
    pub fn event_handler(mut self, event_handler: Arc<dyn SolverEventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the solver
    pub fn build(self) -> Result<EquationSolver, String> {
        create_from_config(self.config, self.event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Default for EquationSolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::LoggingEventHandler;

    #[test]
    fn test_create_from_default_config() {
        let solver = create_from_config(SolverConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(*solver.config(), SolverConfig::default());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = SolverConfig::default().with_max_sweeps(0);
        let err = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap_err();
        assert!(err.contains("sweeps"));
    }

    #[test]
    fn test_builder_pattern() {
        let solver = EquationSolverBuilder::new()
            .max_bisection_rounds(64)
            .max_sweeps(8)
            .rounding(RoundingMode::TowardNegativeInfinity)
            .event_handler(Arc::new(LoggingEventHandler))
            .build()
            .unwrap();

        let config = solver.config();
        assert_eq!(config.max_bisection_rounds, 64);
        assert_eq!(config.max_sweeps, 8);
        assert_eq!(config.rounding, RoundingMode::TowardNegativeInfinity);
    }

    #[test]
    fn test_builder_from_config() {
        let config = SolverConfig::default().with_max_sweeps(3);
        let builder = EquationSolverBuilder::from_config(config).max_bisection_rounds(10);

        assert_eq!(builder.get_config().max_sweeps, 3);
        assert_eq!(builder.get_config().max_bisection_rounds, 10);
    }

    #[test]
    fn test_builder_validation() {
        assert!(EquationSolverBuilder::new().max_sweeps(0).build().is_err());
        assert!(EquationSolverBuilder::default()
            .max_bisection_rounds(0)
            .build()
            .is_ok());
    }
}
