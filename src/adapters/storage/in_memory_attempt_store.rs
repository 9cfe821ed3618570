//! In-Memory Attempt Store Adapter
//!
//! Keeps completions and personal records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::FeatId;
use crate::domain::records::{FeatCompletion, PersonalRecord};
use crate::ports::{AttemptStore, AttemptStoreError};

/// In-memory storage for attempts
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttemptStore {
    completions: Arc<RwLock<Vec<FeatCompletion>>>,
    bests: Arc<RwLock<HashMap<FeatId, PersonalRecord>>>,
    fail_completion_writes: Arc<AtomicBool>,
    fail_best_writes: Arc<AtomicBool>,
}

impl InMemoryAttemptStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `record_completion` calls fail (useful for tests)
    pub fn fail_completion_writes(&self, fail: bool) {
        self.fail_completion_writes.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `record_best_if_higher` calls fail (useful for tests)
    pub fn fail_best_writes(&self, fail: bool) {
        self.fail_best_writes.store(fail, Ordering::SeqCst);
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.completions.write().await.clear();
        self.bests.write().await.clear();
    }

    /// Get the number of stored completions
    pub async fn completion_count(&self) -> usize {
        self.completions.read().await.len()
    }

    /// Seed a personal record directly, bypassing the strictly-higher rule
    pub async fn seed_best(&self, record: PersonalRecord) {
        self.bests.write().await.insert(record.feat_id.clone(), record);
    }
}

#[async_trait]
impl AttemptStore for InMemoryAttemptStore {
    async fn record_completion(&self, completion: &FeatCompletion) -> Result<(), AttemptStoreError> {
        if self.fail_completion_writes.load(Ordering::SeqCst) {
            return Err(AttemptStoreError::Unavailable("completion writes disabled".to_string()));
        }
        self.completions.write().await.push(completion.clone());
        Ok(())
    }

    async fn get_best_score(&self, feat_id: &FeatId) -> Result<Option<PersonalRecord>, AttemptStoreError> {
        Ok(self.bests.read().await.get(feat_id).cloned())
    }

    async fn record_best_if_higher(&self, candidate: &PersonalRecord) -> Result<bool, AttemptStoreError> {
        if self.fail_best_writes.load(Ordering::SeqCst) {
            return Err(AttemptStoreError::Unavailable("best-score writes disabled".to_string()));
        }

        // Check and write under one lock so concurrent writers can't both win
        let mut bests = self.bests.write().await;
        if !PersonalRecord::is_new_best(candidate.rep_count, bests.get(&candidate.feat_id)) {
            return Ok(false);
        }
        bests.insert(candidate.feat_id.clone(), candidate.clone());
        Ok(true)
    }

    async fn list_completions(&self) -> Result<Vec<FeatCompletion>, AttemptStoreError> {
        let mut all = self.completions.read().await.clone();
        all.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use std::time::Duration;

    fn feat_id() -> FeatId {
        FeatId::new("feat_pushups").unwrap()
    }

    fn record(reps: u32) -> PersonalRecord {
        PersonalRecord::new(feat_id(), reps, Duration::from_secs(60), Timestamp::from_unix_secs(1_700_000_000))
    }

    #[tokio::test]
    async fn test_record_and_list_completions() {
        let store = InMemoryAttemptStore::new();
        let older = FeatCompletion::new(feat_id(), 10, Duration::from_secs(60), Timestamp::from_unix_secs(100));
        let newer = FeatCompletion::new(feat_id(), 12, Duration::from_secs(60), Timestamp::from_unix_secs(200));

        store.record_completion(&older).await.unwrap();
        store.record_completion(&newer).await.unwrap();

        let listed = store.list_completions().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].rep_count, 12);
        assert_eq!(listed[1].rep_count, 10);
    }

    #[tokio::test]
    async fn test_best_score_absent_initially() {
        let store = InMemoryAttemptStore::new();
        assert!(store.get_best_score(&feat_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_first_best_is_written() {
        let store = InMemoryAttemptStore::new();
        assert!(store.record_best_if_higher(&record(0)).await.unwrap());
        assert_eq!(store.get_best_score(&feat_id()).await.unwrap().unwrap().rep_count, 0);
    }

    #[tokio::test]
    async fn test_lower_or_equal_best_is_ignored() {
        let store = InMemoryAttemptStore::new();
        store.record_best_if_higher(&record(20)).await.unwrap();

        assert!(!store.record_best_if_higher(&record(20)).await.unwrap());
        assert!(!store.record_best_if_higher(&record(15)).await.unwrap());
        assert_eq!(store.get_best_score(&feat_id()).await.unwrap().unwrap().rep_count, 20);
    }

    #[tokio::test]
    async fn test_higher_best_replaces() {
        let store = InMemoryAttemptStore::new();
        store.record_best_if_higher(&record(20)).await.unwrap();
        assert!(store.record_best_if_higher(&record(21)).await.unwrap());
        assert_eq!(store.get_best_score(&feat_id()).await.unwrap().unwrap().rep_count, 21);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = InMemoryAttemptStore::new();
        store.fail_completion_writes(true);
        store.fail_best_writes(true);

        let completion = FeatCompletion::new(feat_id(), 5, Duration::from_secs(60), Timestamp::now());
        assert!(store.record_completion(&completion).await.is_err());
        assert!(store.record_best_if_higher(&record(5)).await.is_err());
        assert_eq!(store.completion_count().await, 0);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryAttemptStore::new();
        let completion = FeatCompletion::new(feat_id(), 5, Duration::from_secs(60), Timestamp::now());
        store.record_completion(&completion).await.unwrap();
        store.seed_best(record(5)).await;

        store.clear().await;

        assert_eq!(store.completion_count().await, 0);
        assert!(store.get_best_score(&feat_id()).await.unwrap().is_none());
    }
}
