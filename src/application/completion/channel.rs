//! Completion notification channel.
//!
//! A single-slot broadcast of the most recent completion. Readers treat any
//! change as "re-derive best scores, history and rank". Only the latest
//! value is retained; a reader that misses an update can only recover by
//! re-reading the attempt store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::foundation::{FeatId, Timestamp};

/// The last completed feat and when it finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub feat_id: FeatId,
    pub completed_at: Timestamp,
}

/// Creates a connected producer/consumer pair.
///
/// The notifier belongs to the completion recorder; listeners go to the
/// components that refresh derived views.
pub fn completion_channel() -> (CompletionNotifier, CompletionListener) {
    let (sender, receiver) = watch::channel(None);
    (
        CompletionNotifier {
            sender: Arc::new(sender),
        },
        CompletionListener { receiver },
    )
}

/// Producer half.
#[derive(Debug, Clone)]
pub struct CompletionNotifier {
    sender: Arc<watch::Sender<Option<CompletionNotice>>>,
}

impl CompletionNotifier {
    /// Publishes `notice`, replacing any previous value.
    ///
    /// Succeeds even when no listener is currently attached.
    pub fn notify(&self, notice: CompletionNotice) {
        self.sender.send_replace(Some(notice));
    }

    /// Attaches a new listener that starts from the current value.
    pub fn subscribe(&self) -> CompletionListener {
        CompletionListener {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Consumer half.
#[derive(Debug, Clone)]
pub struct CompletionListener {
    receiver: watch::Receiver<Option<CompletionNotice>>,
}

impl CompletionListener {
    /// Most recent completion, if any has happened.
    pub fn latest(&self) -> Option<CompletionNotice> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next completion and returns it.
    ///
    /// Returns `None` once every notifier has been dropped.
    pub async fn changed(&mut self) -> Option<CompletionNotice> {
        self.receiver.changed().await.ok()?;
        self.receiver.borrow_and_update().clone()
    }

    /// Whether a completion arrived since this listener last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}
