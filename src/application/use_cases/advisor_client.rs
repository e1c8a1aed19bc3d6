use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::application::{ChatClient, Clock, RateLimiter};
use crate::domain::{classify, DomainError, Message, RetryDecision, RetryPolicy};

/// Dispatches message sequences to the provider under the shared rate limit,
/// retrying rate-limited attempts and raising classified errors otherwise.
///
/// Per logical request: wait for a slot, send, and on failure classify and
/// either wait out the retry delay and go round again with the same messages,
/// or fail. Suspension happens only in the rate limiter and the retry delay.
pub struct AdvisorClient {
    chat_client: Arc<dyn ChatClient>,
    rate_limiter: Arc<RateLimiter>,
    retry_policy: RetryPolicy,
    clock: Arc<dyn Clock>,
}

impl AdvisorClient {
    pub fn new(
        chat_client: Arc<dyn ChatClient>,
        rate_limiter: Arc<RateLimiter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            chat_client,
            rate_limiter,
            retry_policy: RetryPolicy::default(),
            clock,
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    pub async fn generate_response(&self, messages: &[Message]) -> Result<String, DomainError> {
        let request_id = Uuid::new_v4();
        let mut attempt: u32 = 0;

        loop {
            self.rate_limiter.acquire_slot().await;

            info!(
                "[{}] Dispatching {} messages to {} (attempt {})",
                request_id,
                messages.len(),
                self.chat_client.model_name(),
                attempt
            );

            let failure = match self.chat_client.complete(messages).await {
                Ok(text) => return Ok(text),
                Err(failure) => failure,
            };

            let kind = classify(&failure);
            match self
                .retry_policy
                .should_retry(kind, attempt, failure.retry_after())
            {
                RetryDecision::Retry { delay } => {
                    warn!(
                        "[{}] {} ({}); retrying in {:?} ({}/{})",
                        request_id,
                        kind,
                        failure,
                        delay,
                        attempt + 1,
                        self.retry_policy.max_retries()
                    );
                    self.clock.sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp => {
                    warn!(
                        "[{}] Request failed after {} attempt(s): {} ({})",
                        request_id,
                        attempt + 1,
                        kind,
                        failure
                    );
                    return Err(DomainError::completion(kind, failure.to_string()));
                }
            }
        }
    }
}
