//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `feat` - Feat descriptor and target-duration parsing
//! - `test_run` - Phases and snapshots of a timed attempt
//! - `records` - Completions, personal records, leaderboards, history
//! - `scoring` - Personal record and rank rules

pub mod feat;
pub mod foundation;
pub mod records;
pub mod scoring;
pub mod test_run;
