//! TestPhase - lifecycle of a single timed attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of a test run. Exactly one holds at any time.
///
/// ```text
/// Ready ──> Countdown(n) ──> Active <──> Paused
///   │                          │           │
///   └──────────────────────────┴─> Complete(final) <─┘
///
/// any phase ──reset──> Ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TestPhase {
    #[default]
    Ready,
    Countdown {
        remaining: u32,
    },
    Active,
    Paused,
    Complete {
        final_rep_count: u32,
    },
}

impl TestPhase {
    /// True only while reps may be counted and elapsed time advances.
    pub fn is_active(&self) -> bool {
        matches!(self, TestPhase::Active)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TestPhase::Complete { .. })
    }

    /// Final rep count if the run has completed.
    pub fn final_rep_count(&self) -> Option<u32> {
        match self {
            TestPhase::Complete { final_rep_count } => Some(*final_rep_count),
            _ => None,
        }
    }
}

impl StateMachine for TestPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TestPhase::*;
        matches!(
            (self, target),
            (_, Ready)
                | (Ready, Countdown { .. })
                | (Countdown { .. }, Countdown { .. })
                | (Ready, Active)
                | (Countdown { .. }, Active)
                | (Active, Paused)
                | (Paused, Active)
                | (Active, Complete { .. })
                | (Paused, Complete { .. })
        )
    }
}

impl fmt::Display for TestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestPhase::Ready => write!(f, "Ready"),
            TestPhase::Countdown { remaining } => write!(f, "Countdown({})", remaining),
            TestPhase::Active => write!(f, "Active"),
            TestPhase::Paused => write!(f, "Paused"),
            TestPhase::Complete { final_rep_count } => write!(f, "Complete({})", final_rep_count),
        }
    }
}
