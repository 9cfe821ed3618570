//! FeatHistory - attempts grouped per feat for the history screen.

use serde::{Deserialize, Serialize};

use super::{FeatCompletion, PersonalRecord};
use crate::domain::foundation::{FeatId, Timestamp};

/// All recorded attempts for one feat, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatHistory {
    pub feat_id: FeatId,
    pub feat_name: String,
    pub movement: String,
    pub attempts: Vec<FeatCompletion>,
    pub personal_record: Option<PersonalRecord>,
}

impl FeatHistory {
    /// Builds a history, ordering `attempts` newest first.
    pub fn new(
        feat_id: FeatId,
        feat_name: impl Into<String>,
        movement: impl Into<String>,
        mut attempts: Vec<FeatCompletion>,
        personal_record: Option<PersonalRecord>,
    ) -> Self {
        attempts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Self {
            feat_id,
            feat_name: feat_name.into(),
            movement: movement.into(),
            attempts,
            personal_record,
        }
    }

    pub fn total_attempts(&self) -> usize {
        self.attempts.len()
    }

    /// Mean reps per attempt, rounded down; 0 with no attempts.
    pub fn average_reps(&self) -> u32 {
        if self.attempts.is_empty() {
            return 0;
        }
        let total: u64 = self.attempts.iter().map(|a| u64::from(a.rep_count)).sum();
        (total / self.attempts.len() as u64) as u32
    }

    pub fn latest_attempt_at(&self) -> Option<Timestamp> {
        self.attempts.first().map(|a| a.completed_at)
    }
}
