//! Scoring - personal record and leaderboard rank rules.
//!
//! Pure functions with no state; the application layer supplies the prior
//! best and the leaderboard snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::records::{LeaderboardSnapshot, PersonalRecord};

/// Projected rank of `final_rep_count` against a leaderboard.
///
/// Defined as `1 + count(placements strictly above the score)`, so a tie
/// shares the better rank.
pub fn compute_rank(final_rep_count: u32, leaderboard: &LeaderboardSnapshot) -> u32 {
    let better = leaderboard
        .placements
        .iter()
        .filter(|p| p.total_rep_count > final_rep_count)
        .count();
    u32::try_from(better).unwrap_or(u32::MAX - 1) + 1
}

/// Whether `final_rep_count` beats `previous_best`.
///
/// No previous best means any score counts, zero included.
pub fn is_new_personal_record(final_rep_count: u32, previous_best: Option<&PersonalRecord>) -> bool {
    PersonalRecord::is_new_best(final_rep_count, previous_best)
}

/// True when `rank` falls below every listed placement, i.e. the user would
/// need a separate row under the list.
pub fn is_outside_listed(rank: u32, leaderboard: &LeaderboardSnapshot) -> bool {
    rank as usize > leaderboard.len()
}

/// Result shown on the completion screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionOutcome {
    pub rep_count: u32,
    pub is_new_personal_record: bool,
    /// Absent when no leaderboard snapshot was available.
    pub rank: Option<u32>,
    pub outside_listed: bool,
}

impl CompletionOutcome {
    /// Evaluates a finished attempt against the prior best and an optional
    /// leaderboard.
    pub fn evaluate(
        rep_count: u32,
        previous_best: Option<&PersonalRecord>,
        leaderboard: Option<&LeaderboardSnapshot>,
    ) -> Self {
        let rank = leaderboard.map(|board| compute_rank(rep_count, board));
        let outside_listed = match (rank, leaderboard) {
            (Some(rank), Some(board)) => is_outside_listed(rank, board),
            _ => false,
        };
        Self {
            rep_count,
            is_new_personal_record: is_new_personal_record(rep_count, previous_best),
            rank,
            outside_listed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FeatId, Timestamp};
    use crate::domain::records::Placement;
    use std::time::Duration;

    fn feat_id() -> FeatId {
        FeatId::new("feat_pushups").unwrap()
    }

    fn board(totals: &[u32]) -> LeaderboardSnapshot {
        let placements = totals
            .iter()
            .enumerate()
            .map(|(i, total)| Placement::new(i as u32 + 1, format!("athlete-{}", i), *total))
            .collect();
        LeaderboardSnapshot::new(feat_id(), placements)
    }

    fn best(reps: u32) -> PersonalRecord {
        PersonalRecord::new(feat_id(), reps, Duration::from_secs(60), Timestamp::from_unix_secs(1))
    }

    #[test]
    fn rank_counts_strictly_greater_placements() {
        let b = board(&[50, 40, 30]);
        assert_eq!(compute_rank(35, &b), 3);
        assert_eq!(compute_rank(60, &b), 1);
        assert_eq!(compute_rank(25, &b), 4);
    }

    #[test]
    fn ties_share_the_better_rank() {
        let b = board(&[50, 40, 40, 30]);
        assert_eq!(compute_rank(40, &b), 2);
        assert_eq!(compute_rank(50, &b), 1);
    }

    #[test]
    fn rank_ignores_listing_order() {
        let b = board(&[30, 50, 40]);
        assert_eq!(compute_rank(35, &b), 3);
    }

    #[test]
    fn empty_leaderboard_ranks_first() {
        assert_eq!(compute_rank(0, &board(&[])), 1);
    }

    #[test]
    fn personal_record_rule_is_strict() {
        assert!(is_new_personal_record(30, Some(&best(25))));
        assert!(!is_new_personal_record(25, Some(&best(25))));
        assert!(!is_new_personal_record(20, Some(&best(25))));
        assert!(is_new_personal_record(10, None));
    }

    #[test]
    fn outside_listed_when_rank_exceeds_placements() {
        let b = board(&[50, 40, 30]);
        assert!(!is_outside_listed(3, &b));
        assert!(is_outside_listed(4, &b));
    }

    #[test]
    fn outcome_without_leaderboard_has_no_rank() {
        let outcome = CompletionOutcome::evaluate(12, Some(&best(10)), None);
        assert!(outcome.is_new_personal_record);
        assert_eq!(outcome.rank, None);
        assert!(!outcome.outside_listed);
    }

    #[test]
    fn outcome_with_leaderboard_projects_rank() {
        let b = board(&[50, 40, 30]);
        let outcome = CompletionOutcome::evaluate(25, Some(&best(30)), Some(&b));
        assert!(!outcome.is_new_personal_record);
        assert_eq!(outcome.rank, Some(4));
        assert!(outcome.outside_listed);
    }
}
