//! Clock Adapters
//!
//! - **TokioClock** - Backed by the tokio timer; honours paused test time

mod tokio_clock;

pub use tokio_clock::TokioClock;
