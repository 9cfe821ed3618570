//! Leaderboard source port - read-only access to feat leaderboards.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, FeatId};
use crate::domain::records::LeaderboardSnapshot;

/// Errors surfaced by a leaderboard source.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("No leaderboard for feat: {0}")]
    NotFound(FeatId),

    #[error("Leaderboard unavailable: {0}")]
    Unavailable(String),
}

impl From<LeaderboardError> for DomainError {
    fn from(err: LeaderboardError) -> Self {
        let code = match err {
            LeaderboardError::NotFound(_) => ErrorCode::FeatNotFound,
            LeaderboardError::Unavailable(_) => ErrorCode::LeaderboardUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for fetching the current leaderboard of a feat.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetch the leaderboard snapshot for `feat_id`.
    async fn get_leaderboard(&self, feat_id: &FeatId) -> Result<LeaderboardSnapshot, LeaderboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_source_is_object_safe() {
        fn _accepts_dyn(_source: &dyn LeaderboardSource) {}
    }

    #[test]
    fn not_found_names_the_feat() {
        let err = LeaderboardError::NotFound(FeatId::new("feat_pushups").unwrap());
        assert!(err.to_string().contains("feat_pushups"));
    }

    #[test]
    fn converts_to_domain_error_codes() {
        let not_found: DomainError = LeaderboardError::NotFound(FeatId::new("feat_x").unwrap()).into();
        assert_eq!(not_found.code, ErrorCode::FeatNotFound);

        let offline: DomainError = LeaderboardError::Unavailable("timeout".to_string()).into();
        assert_eq!(offline.code, ErrorCode::LeaderboardUnavailable);
    }
}
