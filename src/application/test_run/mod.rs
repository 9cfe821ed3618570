//! The test-run state machine and its timers.

mod machine;
mod snapshots;
mod timers;

pub use machine::{TestRun, TestRunSettings, DEFAULT_COUNTDOWN_SECONDS, DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL};
pub use snapshots::SnapshotListener;
pub use timers::{CancelToken, ScheduledTask};
