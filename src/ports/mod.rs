//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Monotonic/wall time and sleeps for the test-run timers
//! - `AttemptStore` - Local persistence of completions and best scores
//! - `LeaderboardSource` - Read-only leaderboard snapshots
//! - `FeatCatalog` - Monthly feat metadata

mod attempt_store;
mod clock;
mod feat_catalog;
mod leaderboard_source;

pub use attempt_store::{AttemptStore, AttemptStoreError};
pub use clock::Clock;
pub use feat_catalog::{FeatCatalog, FeatCatalogError};
pub use leaderboard_source::{LeaderboardError, LeaderboardSource};
