//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - Tokio-backed `Clock`
//! - `storage` - File and in-memory `AttemptStore`
//! - `feats` - In-memory `LeaderboardSource` and `FeatCatalog`

pub mod clock;
pub mod feats;
pub mod storage;

pub use clock::TokioClock;
pub use feats::{InMemoryFeatCatalog, InMemoryLeaderboardSource};
pub use storage::{FileAttemptStore, InMemoryAttemptStore};
