//! Repeating timers with explicit ownership.
//!
//! A [`PollHandle`] owns its background task: calling [`PollHandle::stop`]
//! or dropping the handle cancels the timer, so a view that holds the handle
//! for as long as it is active can never leak one.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// How often the now-playing endpoint is polled.
pub const NOW_PLAYING_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// How often the progress bar advances.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running periodic task.
#[derive(Debug)]
pub struct PollHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Runs `task` immediately and then every `period` until stopped.
    ///
    /// Ticks missed while `task` is still running are skipped rather than
    /// bunched up. Must be called from within a tokio runtime.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        debug!(name, period_ms = period.as_millis() as u64, "Starting poller");
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                task().await;
            }
        });
        Self { name, task }
    }

    /// Whether the task is still scheduled.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancels the timer. A call in progress is aborted at its next await.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        debug!(name = self.name, "Stopping poller");
        self.task.abort();
    }
}
