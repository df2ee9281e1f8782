// ============================================================================
// Logging Bootstrap
// Installs a fmt subscriber for the solver's tracing output
// ============================================================================

use tracing::Level;

/// Installs a global `tracing-subscriber` fmt subscriber at `level`.
///
/// Solver milestones are logged at `debug`, per-round progress at `trace`.
/// Fails if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
