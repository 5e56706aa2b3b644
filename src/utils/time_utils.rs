//! Async delay helper

use std::time::Duration;

/// Suspend the current task for at least `ms` milliseconds
///
/// Never fails. There is no cancellation handle: drop the future, or race
/// it with `tokio::select!`, to stop waiting early.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await
}
