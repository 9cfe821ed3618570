//! LoadHistoryHandler - per-feat attempt history.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, FeatId};
use crate::domain::records::{FeatCompletion, FeatHistory};
use crate::ports::{AttemptStore, FeatCatalog};

/// Builds the history view: every stored attempt grouped by feat and joined
/// with the feat catalog.
pub struct LoadHistoryHandler {
    store: Arc<dyn AttemptStore>,
    catalog: Arc<dyn FeatCatalog>,
}

impl LoadHistoryHandler {
    pub fn new(store: Arc<dyn AttemptStore>, catalog: Arc<dyn FeatCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Returns one history per known feat, most recently attempted first.
    ///
    /// Attempts for feats missing from the catalog are skipped.
    pub async fn handle(&self) -> Result<Vec<FeatHistory>, DomainError> {
        let completions = self.store.list_completions().await?;

        let mut grouped: HashMap<FeatId, Vec<FeatCompletion>> = HashMap::new();
        for completion in completions {
            grouped.entry(completion.feat_id.clone()).or_default().push(completion);
        }

        let feats = self.catalog.monthly_feats().await?;

        let mut histories = Vec::with_capacity(grouped.len());
        for (feat_id, attempts) in grouped {
            let Some(feat) = feats.iter().find(|f| f.id == feat_id) else {
                tracing::debug!(feat_id = %feat_id, attempts = attempts.len(), "Skipping history for unknown feat");
                continue;
            };

            let personal_record = self.store.get_best_score(&feat_id).await?;
            histories.push(FeatHistory::new(
                feat_id,
                feat.name.clone(),
                feat.movement.clone(),
                attempts,
                personal_record,
            ));
        }

        histories.sort_by(|a, b| b.latest_attempt_at().cmp(&a.latest_attempt_at()));
        Ok(histories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryAttemptStore, InMemoryFeatCatalog};
    use crate::domain::feat::Feat;
    use crate::domain::foundation::Timestamp;
    use crate::domain::records::PersonalRecord;
    use std::time::Duration;

    fn id(raw: &str) -> FeatId {
        FeatId::new(raw).unwrap()
    }

    fn attempt(feat: &str, reps: u32, at: u64) -> FeatCompletion {
        FeatCompletion::new(id(feat), reps, Duration::from_secs(60), Timestamp::from_unix_secs(at))
    }

    async fn setup(attempts: Vec<FeatCompletion>) -> (InMemoryAttemptStore, LoadHistoryHandler) {
        let store = InMemoryAttemptStore::new();
        for a in &attempts {
            store.record_completion(a).await.unwrap();
        }
        let catalog = InMemoryFeatCatalog::new(vec![
            Feat::new(id("feat_pushups"), "1 MIN PUSH-UPS", "Push-ups"),
            Feat::new(id("feat_squats"), "3 MIN SQUATS", "Squats"),
        ]);
        let handler = LoadHistoryHandler::new(Arc::new(store.clone()), Arc::new(catalog));
        (store, handler)
    }

    #[tokio::test]
    async fn empty_store_gives_empty_history() {
        let (_store, handler) = setup(vec![]).await;
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn groups_by_feat_and_orders_by_latest_attempt() {
        let (_store, handler) = setup(vec![
            attempt("feat_pushups", 20, 100),
            attempt("feat_squats", 30, 300),
            attempt("feat_pushups", 24, 200),
        ])
        .await;

        let histories = handler.handle().await.unwrap();

        assert_eq!(histories.len(), 2);
        assert_eq!(histories[0].feat_name, "3 MIN SQUATS");
        assert_eq!(histories[1].feat_name, "1 MIN PUSH-UPS");
        assert_eq!(histories[1].total_attempts(), 2);
        assert_eq!(histories[1].attempts[0].rep_count, 24);
        assert_eq!(histories[1].average_reps(), 22);
    }

    #[tokio::test]
    async fn unknown_feats_are_skipped() {
        let (_store, handler) = setup(vec![
            attempt("feat_pushups", 20, 100),
            attempt("feat_retired", 99, 500),
        ])
        .await;

        let histories = handler.handle().await.unwrap();

        assert_eq!(histories.len(), 1);
        assert_eq!(histories[0].feat_id, id("feat_pushups"));
    }

    #[tokio::test]
    async fn attaches_personal_record() {
        let (store, handler) = setup(vec![attempt("feat_pushups", 20, 100)]).await;
        store
            .seed_best(PersonalRecord::new(
                id("feat_pushups"),
                20,
                Duration::from_secs(60),
                Timestamp::from_unix_secs(100),
            ))
            .await;

        let histories = handler.handle().await.unwrap();

        assert_eq!(histories[0].personal_record.as_ref().unwrap().rep_count, 20);
    }
}
