//! Cancellable background timers owned by a test run.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Shared flag a timer checks before each effect.
///
/// Cancelling is synchronous: once `cancel()` returns, `is_cancelled()`
/// is true for every clone.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A spawned timer task together with its cancellation token.
///
/// Dropping the task cancels it.
#[derive(Debug)]
pub struct ScheduledTask {
    token: CancelToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawns `make(token)` on `runtime`. The caller need not be a
    /// runtime thread.
    pub fn spawn<F, Fut>(runtime: &Handle, make: F) -> Self
    where
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancelToken::new();
        let handle = runtime.spawn(make(token.clone()));
        Self { token, handle }
    }

    /// Invalidates the token and aborts the task at its next suspension.
    pub fn cancel(&self) {
        self.token.cancel();
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    #[test]
    fn token_cancel_is_visible_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_runs_its_effect() {
        let hits = Arc::new(AtomicU32::new(0));
        let task = {
            let hits = hits.clone();
            ScheduledTask::spawn(&Handle::current(), move |token| async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if !token.is_cancelled() {
                    hits.fetch_add(1, Ordering::SeqCst);
                }
            })
        };

        task.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(task.is_cancelled());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_task_cancels_it() {
        let hits = Arc::new(AtomicU32::new(0));
        {
            let hits = hits.clone();
            let _task = ScheduledTask::spawn(&Handle::current(), move |_token| async move {
                tokio::time::sleep(Duration::from_secs(1)).await;
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn uncancelled_task_completes() {
        let hits = Arc::new(AtomicU32::new(0));
        let task = {
            let hits = hits.clone();
            ScheduledTask::spawn(&Handle::current(), move |_token| async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }
}
