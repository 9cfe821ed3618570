//! Test-run timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::TestRunSettings;

const MAX_TICK_INTERVAL_MS: u64 = 1000;
const MAX_COUNTDOWN_SECONDS: u32 = 60;

/// Timing for the countdown and the elapsed-time ticker
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TestRunConfig {
    /// Default countdown length in seconds
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,

    /// Ticker interval in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl TestRunConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Settings handed to each new `TestRun`
    pub fn settings(&self) -> TestRunSettings {
        TestRunSettings {
            countdown_seconds: self.countdown_seconds,
            tick_interval: self.tick_interval(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval_ms == 0 {
            return Err(ValidationError::ZeroTickInterval);
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ValidationError::TickIntervalTooLarge);
        }
        if self.countdown_seconds > MAX_COUNTDOWN_SECONDS {
            return Err(ValidationError::CountdownTooLong);
        }
        Ok(())
    }
}

impl Default for TestRunConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_countdown_seconds() -> u32 {
    3
}

fn default_tick_interval_ms() -> u64 {
    100
}
