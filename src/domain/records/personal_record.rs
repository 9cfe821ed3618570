//! PersonalRecord - best score for a feat.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::{FeatId, Timestamp};

/// The user's best rep count on a feat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub feat_id: FeatId,
    pub rep_count: u32,
    pub achieved_at: Timestamp,
    pub duration: Duration,
}

impl PersonalRecord {
    pub fn new(feat_id: FeatId, rep_count: u32, duration: Duration, achieved_at: Timestamp) -> Self {
        Self {
            feat_id,
            rep_count,
            achieved_at,
            duration,
        }
    }

    /// Whether `rep_count` would replace `existing` as the best.
    ///
    /// Strictly greater wins; a tie keeps the existing record. With no
    /// existing record any score, including zero, is a new best.
    pub fn is_new_best(rep_count: u32, existing: Option<&PersonalRecord>) -> bool {
        existing.map_or(true, |best| rep_count > best.rep_count)
    }
}
