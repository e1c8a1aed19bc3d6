use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::application::Clock;

pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Enforces a minimum spacing between successive outbound requests across
/// every caller sharing this instance.
///
/// The last dispatch instant lives behind a single async mutex that is held
/// across the wait, so the check, the sleep and the update form one atomic
/// unit. Tokio's mutex is fair, so waiters are served in FIFO order.
pub struct RateLimiter {
    min_interval: Duration,
    clock: Arc<dyn Clock>,
    last_dispatch: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_interval,
            clock,
            last_dispatch: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Suspend until a dispatch is permitted, then reserve the slot.
    ///
    /// Returns the reserved dispatch instant.
    pub async fn acquire_slot(&self) -> Instant {
        let mut last = self.last_dispatch.lock().await;

        if let Some(previous) = *last {
            let elapsed = self.clock.now().saturating_duration_since(previous);
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("Rate limiter: waiting {:?} for next slot", wait);
                self.clock.sleep(wait).await;
            }
        }

        // Never move backwards, even if the clock source does.
        let now = match *last {
            Some(previous) => self.clock.now().max(previous),
            None => self.clock.now(),
        };
        *last = Some(now);
        now
    }

    pub async fn last_dispatch(&self) -> Option<Instant> {
        *self.last_dispatch.lock().await
    }
}
