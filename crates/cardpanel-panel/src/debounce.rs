//! Cancellable delayed execution.
//!
//! A [`Debouncer`] runs a future once its quiet window has elapsed. Scheduling
//! again before that aborts the pending future and restarts the window, so
//! only the last of a burst of inputs does any work.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `task` after the quiet window, replacing anything still pending.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Abort the pending task, whether it is still waiting or already running.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            trace!("Cancelling pending debounced task");
            handle.abort();
        }
    }

    /// Returns `true` while a scheduled task has not finished.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
