use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Time source used for rate limiting and retry delays.
///
/// Injected so tests can drive time deterministically instead of sleeping.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}
