//! Explicit, cancellable debounce timer.
//!
//! Each controller instance owns one of these instead of sharing a hidden
//! module-level timer handle. At most one action is pending at a time:
//! scheduling replaces (and aborts) whatever was pending, so a burst of N
//! schedules runs the action exactly once, one delay after the last call.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Single-slot delayed action runner.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Delay used for free-text input debouncing.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `action` after the delay, unless another `schedule` or `cancel`
    /// happens first. Any previously pending action is aborted, whether it
    /// was still sleeping or already running.
    pub async fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        if let Some(previous) = self.pending.lock().await.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending action, if any.
    pub async fn cancel(&self) {
        if let Some(pending) = self.pending.lock().await.take() {
            pending.abort();
        }
    }

    /// Whether an action is scheduled and has not finished.
    pub async fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // A pending action must not outlive its owner
        if let Some(pending) = self.pending.get_mut().take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_action(counter: Arc<AtomicUsize>, amount: usize) -> impl Future<Output = ()> {
        async move {
            counter.fetch_add(amount, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_runs_after_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let counter = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(counting_action(counter.clone(), 1)).await;
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let counter = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(counting_action(counter.clone(), 1)).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(counting_action(counter.clone(), 10)).await;
        tokio::time::sleep(Duration::from_millis(600)).await;

        // Only the replacement ran, one delay after the second schedule
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_to_one_run() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            debouncer.schedule(counting_action(counter.clone(), 1)).await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let counter = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(counting_action(counter.clone(), 1)).await;
        debouncer.cancel().await;
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_pending_while_sleeping() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let counter = Arc::new(AtomicUsize::new(0));

        assert!(!debouncer.is_pending().await);
        debouncer.schedule(counting_action(counter.clone(), 1)).await;
        assert!(debouncer.is_pending().await);
    }
}
