use std::time::Duration;

use crate::domain::ErrorKind;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry { delay: Duration },
    GiveUp,
}

impl RetryDecision {
    pub fn should_retry(&self) -> bool {
        matches!(self, RetryDecision::Retry { .. })
    }
}

/// Decides whether a classified failure is attempted again.
///
/// Only [`ErrorKind::RateLimited`] is retried, and only while
/// `attempt < max_retries`. Everything else fails fast, including
/// [`ErrorKind::ServerFault`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    default_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            default_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, default_delay: Duration) -> Self {
        Self {
            max_retries,
            default_delay,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    /// `attempt` is zero-based: the first dispatch is attempt 0.
    /// `retry_after` is the provider-supplied delay, when the reply carried one.
    pub fn should_retry(
        &self,
        kind: ErrorKind,
        attempt: u32,
        retry_after: Option<Duration>,
    ) -> RetryDecision {
        if kind != ErrorKind::RateLimited || attempt >= self.max_retries {
            return RetryDecision::GiveUp;
        }

        RetryDecision::Retry {
            delay: retry_after.unwrap_or(self.default_delay),
        }
    }
}
