//! FeatCompletion - one recorded attempt.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::{format_clock, CompletionId, FeatId, Timestamp};

/// A finished attempt at a feat, as persisted by the attempt store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatCompletion {
    pub id: CompletionId,
    pub feat_id: FeatId,
    pub completed_at: Timestamp,
    pub rep_count: u32,
    /// Active (non-paused) time spent in the attempt.
    pub duration: Duration,
}

impl FeatCompletion {
    pub fn new(feat_id: FeatId, rep_count: u32, duration: Duration, completed_at: Timestamp) -> Self {
        Self {
            id: CompletionId::new(),
            feat_id,
            completed_at,
            rep_count,
            duration,
        }
    }

    /// Duration rendered as `m:ss`.
    pub fn formatted_duration(&self) -> String {
        format_clock(self.duration)
    }
}
