//! Tokio-backed clock.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock driven by the tokio runtime timer.
///
/// Under `#[tokio::test(start_paused = true)]` both `now()` and `sleep()`
/// follow the runtime's virtual time, so timer behaviour is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp(&self) -> Timestamp {
        Timestamp::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
