// ============================================================================
// Deadline-Bounded Solving
// Runs a goal seek on the blocking pool under a tokio timeout
// ============================================================================

use super::EquationSolver;
use crate::domain::{SolveError, Solution};
use crate::numeric::DecimalValue;
use tokio::time::{timeout, Duration};

/// Solves `f(x) == target` over `[min, max]`, giving up after `limit`.
///
/// The solve runs on tokio's blocking pool. When the deadline passes first
/// the computation is abandoned rather than interrupted: it keeps its
/// blocking thread until it returns, and its result is dropped.
///
/// # Errors
/// - `SolveError::TimedOut` if `limit` elapses first
/// - `SolveError::TaskFailed` if the solving task panicked
pub async fn solve_with_timeout<F>(
    solver: EquationSolver,
    min: DecimalValue,
    max: DecimalValue,
    target: DecimalValue,
    precision: u32,
    f: F,
    limit: Duration,
) -> Result<Solution, SolveError>
where
    F: Fn(&DecimalValue) -> DecimalValue + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || solver.solve(min, max, target, precision, f));

    match timeout(limit, task).await {
        Ok(Ok(solution)) => Ok(solution),
        Ok(Err(err)) => {
            tracing::warn!("Goal seek task failed: {}", err);
            Err(SolveError::TaskFailed(err.to_string()))
        },
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Goal seek timed out");
            Err(SolveError::TimedOut)
        },
    }
}
