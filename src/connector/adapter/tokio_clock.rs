use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::application::Clock;

/// [`Clock`] backed by the tokio timer, so paused test runtimes control it too.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
