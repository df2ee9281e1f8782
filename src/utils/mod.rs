// ============================================================================
// Utilities Module
// Process-level helpers outside the solver proper
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
