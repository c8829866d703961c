use std::time::Duration;

use async_trait::async_trait;

/// Scheduler port abstracting the passage of time.
///
/// The lifecycle loop sleeps through this port instead of calling a timer
/// directly, so tests can drive the state machine with a scheduler that
/// returns immediately.
#[async_trait]
pub trait Scheduler {
    async fn sleep(&self, duration: Duration);
}
