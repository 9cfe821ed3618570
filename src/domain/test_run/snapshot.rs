//! Observable view of a test run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TestPhase;
use crate::domain::foundation::{format_clock, FeatId};

/// Rep counts that are positive multiples of this value are milestones.
pub const MILESTONE_INTERVAL: u32 = 10;

/// Returns the milestone reached by `rep_count`, if it is one.
///
/// Only exact multiples count: reps are always added one at a time, so a
/// milestone can never be skipped over.
pub fn milestone_for(rep_count: u32) -> Option<u32> {
    (rep_count > 0 && rep_count % MILESTONE_INTERVAL == 0).then_some(rep_count)
}

/// Point-in-time copy of a test run's state, published to observers on
/// every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TestRunSnapshot {
    pub feat_id: Option<FeatId>,
    pub movement: Option<String>,
    pub phase: TestPhase,
    pub rep_count: u32,
    pub elapsed: Duration,
    pub paused_elapsed: Duration,
    pub test_duration: Duration,
    pub last_milestone: Option<u32>,
}

impl TestRunSnapshot {
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Time left before the run completes on its own.
    pub fn remaining(&self) -> Duration {
        self.test_duration.saturating_sub(self.elapsed)
    }

    /// Fraction of the target duration used, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.test_duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.test_duration.as_secs_f64()).min(1.0)
    }

    /// Remaining time rendered as `m:ss`.
    pub fn remaining_display(&self) -> String {
        format_clock(self.remaining())
    }
}
