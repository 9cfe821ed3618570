//! Feat Adapters
//!
//! In-memory implementations of the `LeaderboardSource` and `FeatCatalog`
//! ports, used for development and tests.

mod in_memory_catalog;
mod in_memory_leaderboard;

pub use in_memory_catalog::InMemoryFeatCatalog;
pub use in_memory_leaderboard::InMemoryLeaderboardSource;
