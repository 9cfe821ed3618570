//! Ladder core - timed rep-counting attempts for monthly fitness feats.
//!
//! The crate owns the test-run state machine (countdown, active counting,
//! pause/resume, completion), records finished attempts through an
//! attempt store, projects personal-record and leaderboard standing, and
//! broadcasts completions so other views can refresh.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
