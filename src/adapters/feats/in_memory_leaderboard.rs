//! In-memory leaderboard source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::FeatId;
use crate::domain::records::LeaderboardSnapshot;
use crate::ports::{LeaderboardError, LeaderboardSource};

/// Leaderboards held in memory, keyed by feat.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboardSource {
    boards: Arc<RwLock<HashMap<FeatId, LeaderboardSnapshot>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryLeaderboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source already holding `snapshot`
    pub fn with_leaderboard(snapshot: LeaderboardSnapshot) -> Self {
        let mut boards = HashMap::new();
        boards.insert(snapshot.feat_id.clone(), snapshot);
        Self {
            boards: Arc::new(RwLock::new(boards)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the leaderboard for the snapshot's feat
    pub async fn set_leaderboard(&self, snapshot: LeaderboardSnapshot) {
        self.boards.write().await.insert(snapshot.feat_id.clone(), snapshot);
    }

    /// Simulate an outage (useful for tests)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl LeaderboardSource for InMemoryLeaderboardSource {
    async fn get_leaderboard(&self, feat_id: &FeatId) -> Result<LeaderboardSnapshot, LeaderboardError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LeaderboardError::Unavailable("leaderboard source offline".to_string()));
        }

        self.boards
            .read()
            .await
            .get(feat_id)
            .cloned()
            .ok_or_else(|| LeaderboardError::NotFound(feat_id.clone()))
    }
}
