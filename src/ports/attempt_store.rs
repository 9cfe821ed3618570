//! Attempt store port - local persistence of completions and best scores.
//!
//! The store is the single source of truth for history and personal
//! records. Only the completion recorder writes to it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, FeatId};
use crate::domain::records::{FeatCompletion, PersonalRecord};

/// Errors that can occur during attempt store operations
#[derive(Debug, thiserror::Error)]
pub enum AttemptStoreError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<AttemptStoreError> for DomainError {
    fn from(err: AttemptStoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting attempts and personal records.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Append a completion record.
    ///
    /// # Errors
    /// Returns `AttemptStoreError` if the write fails
    async fn record_completion(&self, completion: &FeatCompletion) -> Result<(), AttemptStoreError>;

    /// Highest recorded score for a feat, if any.
    async fn get_best_score(&self, feat_id: &FeatId) -> Result<Option<PersonalRecord>, AttemptStoreError>;

    /// Store `candidate` as the feat's best only if it is strictly higher
    /// than the existing best (or none exists).
    ///
    /// # Returns
    /// `true` if the candidate was written, `false` for the no-op case
    async fn record_best_if_higher(&self, candidate: &PersonalRecord) -> Result<bool, AttemptStoreError>;

    /// All completions, newest first.
    async fn list_completions(&self) -> Result<Vec<FeatCompletion>, AttemptStoreError>;
}
