use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{AdvisorClient, ChatClient, Clock, FinancialAdvisor, RateLimiter};
use crate::domain::RetryPolicy;
use crate::{MockChatClient, OpenAiChatClient, OpenAiConfig, TokioClock};

pub struct ContainerConfig {
    /// Provider credential. Required unless `mock` is set.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub min_request_interval: Duration,
    pub retry_delay: Duration,
    pub max_retries: u32,
    /// Per-request timeout; `None` disables it.
    pub request_timeout: Option<Duration>,
    /// Answer with [`MockChatClient`] instead of calling the provider.
    pub mock: bool,
}

pub struct Container {
    advisor_client: Arc<AdvisorClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let api_key = config.api_key.clone().ok_or_else(|| {
                anyhow::anyhow!("an API key is required: pass --api-key or set FINADVICE_API_KEY")
            })?;
            let openai_config = OpenAiConfig {
                api_key,
                base_url: config.base_url.clone(),
                model: config.model.clone(),
                temperature: config.temperature,
                max_tokens: config.max_tokens,
                timeout: config.request_timeout,
            };
            debug!("Initializing chat client: {:?}", openai_config);
            Arc::new(OpenAiChatClient::new(openai_config)?)
        };

        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let rate_limiter = Arc::new(RateLimiter::new(
            config.min_request_interval,
            Arc::clone(&clock),
        ));
        let advisor_client = Arc::new(
            AdvisorClient::new(chat_client, rate_limiter, clock)
                .with_retry_policy(RetryPolicy::new(config.max_retries, config.retry_delay)),
        );

        Ok(Self {
            advisor_client,
            config,
        })
    }

    pub fn advisor(&self) -> FinancialAdvisor {
        FinancialAdvisor::new(self.advisor_client.clone())
    }

    pub fn advisor_client(&self) -> Arc<AdvisorClient> {
        self.advisor_client.clone()
    }

    pub fn model(&self) -> &str {
        if self.config.mock {
            "mock-chat"
        } else {
            &self.config.model
        }
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }
}
