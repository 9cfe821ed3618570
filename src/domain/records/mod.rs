//! Records domain module.
//!
//! Entities owned by external collaborators (the attempt store and the
//! leaderboard source) that the test run reads or writes through ports.

mod completion;
mod history;
mod leaderboard;
mod personal_record;

pub use completion::FeatCompletion;
pub use history::FeatHistory;
pub use leaderboard::{LeaderboardSnapshot, Placement, RankMovement};
pub use personal_record::PersonalRecord;
