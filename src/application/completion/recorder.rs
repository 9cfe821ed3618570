//! CompletionRecorder - persists a finished attempt and announces it.

use std::sync::Arc;
use std::time::Duration;

use super::channel::{CompletionNotice, CompletionNotifier};
use crate::domain::foundation::FeatId;
use crate::domain::records::{FeatCompletion, PersonalRecord};
use crate::ports::{AttemptStore, Clock};

/// What happened to the two writes of one recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordingReport {
    pub completion_saved: bool,
    pub new_best_saved: bool,
}

/// Writes completions and best scores through the attempt store, then
/// publishes a completion notice.
///
/// This is the only writer of attempts and personal records.
#[derive(Clone)]
pub struct CompletionRecorder {
    store: Arc<dyn AttemptStore>,
    clock: Arc<dyn Clock>,
    notifier: CompletionNotifier,
}

impl CompletionRecorder {
    pub fn new(store: Arc<dyn AttemptStore>, clock: Arc<dyn Clock>, notifier: CompletionNotifier) -> Self {
        Self {
            store,
            clock,
            notifier,
        }
    }

    /// Records one attempt.
    ///
    /// Store failures are logged and swallowed. The best-score write is
    /// attempted only after the completion was saved. The notice is
    /// published whatever the outcome so readers re-derive their views.
    pub async fn record(&self, feat_id: FeatId, rep_count: u32, duration: Duration) -> RecordingReport {
        let completed_at = self.clock.timestamp();
        let mut report = RecordingReport::default();

        let completion = FeatCompletion::new(feat_id.clone(), rep_count, duration, completed_at);
        match self.store.record_completion(&completion).await {
            Ok(()) => report.completion_saved = true,
            Err(e) => {
                tracing::warn!(feat_id = %feat_id, rep_count, error = %e, "Failed to record completion");
            }
        }

        if report.completion_saved {
            let candidate = PersonalRecord::new(feat_id.clone(), rep_count, duration, completed_at);
            match self.store.record_best_if_higher(&candidate).await {
                Ok(written) => report.new_best_saved = written,
                Err(e) => {
                    tracing::warn!(feat_id = %feat_id, rep_count, error = %e, "Failed to update best score");
                }
            }
        }

        tracing::info!(
            feat_id = %feat_id,
            rep_count,
            completion_saved = report.completion_saved,
            new_best = report.new_best_saved,
            "Completion recorded"
        );

        self.notifier.notify(CompletionNotice { feat_id, completed_at });
        report
    }
}
