//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("Tick interval exceeds maximum allowed (1000 ms)")]
    TickIntervalTooLarge,

    #[error("Countdown exceeds maximum allowed (60 s)")]
    CountdownTooLong,

    #[error("Storage data_dir must not be empty")]
    EmptyDataDir,

    #[error("Log level directive must not be empty")]
    EmptyLogLevel,
}
