//! File-based Attempt Store Adapter
//!
//! Persists completions and personal records as JSON documents on disk:
//!
//! ```text
//! <base_path>/
//!   completions.json   # array of FeatCompletion
//!   bests.json         # map of feat id -> PersonalRecord
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::FeatId;
use crate::domain::records::{FeatCompletion, PersonalRecord};
use crate::ports::{AttemptStore, AttemptStoreError};

const COMPLETIONS_FILE: &str = "completions.json";
const BESTS_FILE: &str = "bests.json";

/// File-based storage for attempts
#[derive(Debug, Clone)]
pub struct FileAttemptStore {
    base_path: PathBuf,
    // Serializes read-modify-write cycles on the JSON documents.
    write_lock: Arc<Mutex<()>>,
}

impl FileAttemptStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileAttemptStore::new("./data/attempts");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn completions_path(&self) -> PathBuf {
        self.base_path.join(COMPLETIONS_FILE)
    }

    fn bests_path(&self) -> PathBuf {
        self.base_path.join(BESTS_FILE)
    }

    async fn ensure_dir(&self) -> Result<(), AttemptStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| AttemptStoreError::IoError(e.to_string()))
    }

    /// Reads a JSON document, treating a missing file as the default value.
    async fn read_json<T>(&self, path: &Path) -> Result<T, AttemptStoreError>
    where
        T: DeserializeOwned + Default,
    {
        if !path.exists() {
            return Ok(T::default());
        }

        let json = fs::read_to_string(path)
            .await
            .map_err(|e| AttemptStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| AttemptStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), AttemptStoreError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AttemptStoreError::SerializationFailed(e.to_string()))?;

        fs::write(path, json)
            .await
            .map_err(|e| AttemptStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AttemptStore for FileAttemptStore {
    async fn record_completion(&self, completion: &FeatCompletion) -> Result<(), AttemptStoreError> {
        let _guard = self.write_lock.lock().await;

        let path = self.completions_path();
        let mut completions: Vec<FeatCompletion> = self.read_json(&path).await?;
        completions.push(completion.clone());
        self.write_json(&path, &completions).await
    }

    async fn get_best_score(&self, feat_id: &FeatId) -> Result<Option<PersonalRecord>, AttemptStoreError> {
        let mut bests: HashMap<FeatId, PersonalRecord> = self.read_json(&self.bests_path()).await?;
        Ok(bests.remove(feat_id))
    }

    async fn record_best_if_higher(&self, candidate: &PersonalRecord) -> Result<bool, AttemptStoreError> {
        let _guard = self.write_lock.lock().await;

        let path = self.bests_path();
        let mut bests: HashMap<FeatId, PersonalRecord> = self.read_json(&path).await?;
        if !PersonalRecord::is_new_best(candidate.rep_count, bests.get(&candidate.feat_id)) {
            return Ok(false);
        }

        bests.insert(candidate.feat_id.clone(), candidate.clone());
        self.write_json(&path, &bests).await?;
        Ok(true)
    }

    async fn list_completions(&self) -> Result<Vec<FeatCompletion>, AttemptStoreError> {
        let mut completions: Vec<FeatCompletion> = self.read_json(&self.completions_path()).await?;
        completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(completions)
    }
}
