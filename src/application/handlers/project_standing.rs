//! ProjectStandingHandler - PR and rank for a finished attempt.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, FeatId};
use crate::domain::records::PersonalRecord;
use crate::domain::scoring::CompletionOutcome;
use crate::ports::{AttemptStore, LeaderboardSource};

/// Query for the standing of a just-finished attempt.
#[derive(Debug, Clone)]
pub struct ProjectStandingQuery {
    pub feat_id: FeatId,
    pub rep_count: u32,
}

/// Computes whether an attempt is a new personal record and where it
/// would place on the leaderboard.
pub struct ProjectStandingHandler {
    store: Arc<dyn AttemptStore>,
    leaderboard: Arc<dyn LeaderboardSource>,
}

impl ProjectStandingHandler {
    pub fn new(store: Arc<dyn AttemptStore>, leaderboard: Arc<dyn LeaderboardSource>) -> Self {
        Self { store, leaderboard }
    }

    /// Reads the prior best from the store, then evaluates.
    ///
    /// Call this before the attempt itself is recorded, otherwise the
    /// attempt is compared against itself. Use [`Self::handle_with_prior`]
    /// when the prior best was captured earlier.
    pub async fn handle(&self, query: ProjectStandingQuery) -> Result<CompletionOutcome, DomainError> {
        let prior = self.store.get_best_score(&query.feat_id).await?;
        Ok(self.handle_with_prior(query, prior.as_ref()).await)
    }

    /// Evaluates against an already-known prior best.
    ///
    /// A leaderboard failure only drops the rank.
    pub async fn handle_with_prior(
        &self,
        query: ProjectStandingQuery,
        prior: Option<&PersonalRecord>,
    ) -> CompletionOutcome {
        let leaderboard = match self.leaderboard.get_leaderboard(&query.feat_id).await {
            Ok(board) => Some(board),
            Err(e) => {
                tracing::warn!(feat_id = %query.feat_id, error = %e, "Leaderboard unavailable, omitting rank");
                None
            }
        };

        let outcome = CompletionOutcome::evaluate(query.rep_count, prior, leaderboard.as_ref());
        tracing::debug!(
            feat_id = %query.feat_id,
            rep_count = outcome.rep_count,
            new_pr = outcome.is_new_personal_record,
            rank = ?outcome.rank,
            "Projected standing"
        );
        outcome
    }
}
