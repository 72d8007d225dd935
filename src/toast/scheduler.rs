// ABOUTME: One-shot task scheduling used for toast auto-removal
// The tokio implementation spawns a sleeping task and hands back its abort handle

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::warn;

/// A deferred action that runs once after a delay.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled task. Cancelling after the task already ran is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait TaskHandle: Send + Sync {
    fn cancel(&self);
}

/// Runs tasks after a delay.
///
/// An implementation may run the task before `schedule` returns; the toast
/// manager never holds its state lock while scheduling.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn TaskHandle>;
}

impl TaskHandle for AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

/// Handle for a task that was never scheduled.
#[derive(Debug, Default)]
pub struct Unscheduled;

impl TaskHandle for Unscheduled {
    fn cancel(&self) {}
}

/// Schedules tasks on the tokio runtime current at the time of scheduling.
///
/// The scheduler itself can be created before the runtime starts. Without a
/// runtime the task is dropped and the toast stays until it is removed by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn TaskHandle> {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No tokio runtime available, auto-removal of toast skipped");
            return Box::new(Unscheduled);
        };

        let join = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(join.abort_handle())
    }
}
