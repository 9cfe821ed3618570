//! Snapshot feed of a test run.
//!
//! Readers only ever receive owned copies. No borrow of the channel can
//! outlive a call, so an observer is free to drive the run from the same
//! thread that reads it.

use tokio::sync::watch;

use crate::domain::test_run::TestRunSnapshot;

/// Consumer side of a run's snapshot feed.
#[derive(Debug, Clone)]
pub struct SnapshotListener {
    receiver: watch::Receiver<TestRunSnapshot>,
}

impl SnapshotListener {
    pub(super) fn new(receiver: watch::Receiver<TestRunSnapshot>) -> Self {
        Self { receiver }
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> TestRunSnapshot {
        self.receiver.borrow().clone()
    }

    /// Waits for the next change and returns the new snapshot, marking it
    /// seen.
    ///
    /// Returns `None` once the run has been dropped.
    pub async fn changed(&mut self) -> Option<TestRunSnapshot> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Returns the latest snapshot and marks it seen.
    pub fn take(&mut self) -> TestRunSnapshot {
        self.receiver.borrow_and_update().clone()
    }

    /// Whether a snapshot arrived since this listener last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}
