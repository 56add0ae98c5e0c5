//! Async task lifecycle tracking

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Tasks spawned and not yet finished
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);
/// Monotonic id source for log correlation
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active count when the task finishes or is aborted
struct ActiveGuard {
    name: &'static str,
    task_id: u64,
    start: Instant,
    finished: bool,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
        let duration_ms = self.start.elapsed().as_millis();
        if self.finished {
            tracing::debug!(task = %self.name, task_id = self.task_id, duration_ms, "Task completed");
        } else {
            tracing::debug!(task = %self.name, task_id = self.task_id, duration_ms, "Task cancelled");
        }
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Example
///
/// ```rust,ignore
/// let ticker = spawn_tracked("otp_countdown", async move {
///     run_countdown(otp).await
/// });
/// ticker.abort();
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);

    tracing::debug!(task = %name, task_id, "Task spawned");

    let mut guard = ActiveGuard {
        name,
        task_id,
        start: Instant::now(),
        finished: false,
    };

    tokio::spawn(async move {
        let result = future.await;
        guard.finished = true;
        drop(guard);
        result
    })
}
