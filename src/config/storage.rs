//! Attempt storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where attempts are persisted
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory for the JSON attempt store; in-memory when unset
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn is_file_backed(&self) -> bool {
        self.data_dir.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ValidationError::EmptyDataDir),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_memory() {
        let config = StorageConfig::default();
        assert!(!config.is_file_backed());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_dir_rejected() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDataDir));
    }
}
