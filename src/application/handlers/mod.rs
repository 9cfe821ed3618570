//! Application handlers.
//!
//! Query handlers that read through the ports and apply domain rules.

mod load_history;
mod project_standing;

pub use load_history::LoadHistoryHandler;
pub use project_standing::{ProjectStandingHandler, ProjectStandingQuery};
