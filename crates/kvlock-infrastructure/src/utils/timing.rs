//! Timing instrumentation helpers

use std::time::{Duration, Instant};

/// Tracks the elapsed time of an operation
///
/// # Example
///
/// ```ignore
/// use kvlock_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// let token = lock.try_lock("job:42", options).await;
/// info!(elapsed_ms = timer.elapsed_ms(), acquired = token.is_some(), "lock attempt finished");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds, saturating
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Remaining time before `deadline`, None once exceeded
    pub fn remaining(&self, deadline: Duration) -> Option<Duration> {
        deadline.checked_sub(self.start.elapsed())
    }
}
