//! Clock port - time source and delay primitive for timers.
//!
//! The test run never reads the system clock directly so tests can drive
//! time deterministically.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::foundation::Timestamp;

/// Port supplying monotonic time, wall-clock time and sleeps.
///
/// Implementations must ensure:
/// - `now()` never goes backwards
/// - `sleep()` is cancel-safe (dropping the future abandons the wait)
#[async_trait]
pub trait Clock: Send + Sync {
    /// Monotonic instant used for elapsed-time accounting.
    fn now(&self) -> Instant;

    /// Wall-clock time used for persisted records and notifications.
    fn timestamp(&self) -> Timestamp;

    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}
