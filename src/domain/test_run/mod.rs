//! Test run domain module.
//!
//! Pure types describing a single timed attempt. The time-driven state
//! machine that mutates them lives in `application::test_run`.

mod phase;
mod snapshot;

pub use phase::TestPhase;
pub use snapshot::{milestone_for, TestRunSnapshot, MILESTONE_INTERVAL};
