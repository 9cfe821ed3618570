//! Completion recording and notification.

mod channel;
mod recorder;

pub use channel::{completion_channel, CompletionListener, CompletionNotice, CompletionNotifier};
pub use recorder::{CompletionRecorder, RecordingReport};
