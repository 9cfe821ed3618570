//! Leaderboard snapshot as delivered by the leaderboard source.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FeatId;

/// Direction a placement moved since the previous leaderboard refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankMovement {
    Up,
    Down,
    #[default]
    Unchanged,
}

/// One listed entry on a feat leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Rank as listed by the server.
    pub placement: u32,
    pub name: String,
    pub total_rep_count: u32,
    #[serde(default)]
    pub movement: RankMovement,
}

impl Placement {
    pub fn new(placement: u32, name: impl Into<String>, total_rep_count: u32) -> Self {
        Self {
            placement,
            name: name.into(),
            total_rep_count,
            movement: RankMovement::Unchanged,
        }
    }

    pub fn with_movement(mut self, movement: RankMovement) -> Self {
        self.movement = movement;
        self
    }
}

/// Read-only leaderboard for one feat. Placement order is not relied upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub feat_id: FeatId,
    pub placements: Vec<Placement>,
}

impl LeaderboardSnapshot {
    pub fn new(feat_id: FeatId, placements: Vec<Placement>) -> Self {
        Self {
            feat_id,
            placements,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
