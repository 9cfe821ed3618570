//! Application layer - the test run, completion recording, and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod app_state;
pub mod completion;
pub mod handlers;
pub mod test_run;

pub use app_state::LadderAppState;
pub use completion::{
    completion_channel, CompletionListener, CompletionNotice, CompletionNotifier, CompletionRecorder,
    RecordingReport,
};
pub use handlers::{LoadHistoryHandler, ProjectStandingHandler, ProjectStandingQuery};
pub use test_run::{TestRun, TestRunSettings};
