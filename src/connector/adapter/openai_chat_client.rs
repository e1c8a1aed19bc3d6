use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{CompletionFailure, DomainError, Message};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Connection and generation settings for [`OpenAiChatClient`].
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable                 | Default                  |
    /// |--------------------------|--------------------------|
    /// | `FINADVICE_API_KEY`      | required                 |
    /// | `FINADVICE_BASE_URL`     | `https://api.openai.com` |
    /// | `FINADVICE_MODEL`        | `gpt-4o-mini`            |
    /// | `FINADVICE_TEMPERATURE`  | `0.7`                    |
    /// | `FINADVICE_MAX_TOKENS`   | `1000`                   |
    /// | `FINADVICE_TIMEOUT_SECS` | `60` (`0` disables)      |
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("FINADVICE_API_KEY")
            .map_err(|_| DomainError::configuration("FINADVICE_API_KEY is not set"))?;
        let mut config = Self::new(key);

        if let Ok(base) = std::env::var("FINADVICE_BASE_URL") {
            config.base_url = base;
        }
        if let Ok(model) = std::env::var("FINADVICE_MODEL") {
            config.model = model;
        }
        if let Some(temperature) = parse_env("FINADVICE_TEMPERATURE")? {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = parse_env("FINADVICE_MAX_TOKENS")? {
            config.max_tokens = max_tokens;
        }
        if let Some(secs) = parse_env::<u64>("FINADVICE_TIMEOUT_SECS")? {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, DomainError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DomainError::configuration(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}

/// Read a `retry-after` header value as a delay in milliseconds.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_millis)
}

/// HTTP client for OpenAI-compatible chat-completion endpoints.
///
/// Sends `Authorization: Bearer <key>` with a JSON body of model, messages,
/// temperature and max tokens, and returns `choices[0].message.content`.
/// Any non-2xx status becomes a [`CompletionFailure`] carrying the status and,
/// when present, the `retry-after` delay; classification is left to the caller.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, DomainError> {
        if config.api_key.trim().is_empty() {
            return Err(DomainError::configuration("API key must not be empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        let url = format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH);

        Ok(Self {
            client,
            api_key: config.api_key,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            url,
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionFailure> {
        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionFailure::network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after);
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");

            let failure = CompletionFailure::http(status.as_u16(), format!("API returned {status}"));
            return Err(match retry_after {
                Some(delay) => failure.with_retry_after(delay),
                None => failure,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| CompletionFailure::network(format!("failed to parse response: {e}")))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CompletionFailure::network("response contained no choices"))?;

        debug!("OpenAiChatClient: received {} chars", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> OpenAiChatClient {
        OpenAiChatClient::new(
            OpenAiConfig::new("test-key")
                .with_base_url(server.uri())
                .with_model("test-model"),
        )
        .unwrap()
    }

    fn messages() -> Vec<Message> {
        vec![Message::system("be brief"), Message::user("hi")]
    }

    #[test]
    fn parse_retry_after_reads_milliseconds() {
        assert_eq!(parse_retry_after("2000"), Some(Duration::from_millis(2000)));
        assert_eq!(parse_retry_after(" 15 "), Some(Duration::from_millis(15)));
        assert_eq!(parse_retry_after("soon"), None);
        assert_eq!(parse_retry_after("-1"), None);
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = OpenAiChatClient::new(OpenAiConfig::new("  ")).err().unwrap();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let rendered = format!("{:?}", OpenAiConfig::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn url_joins_base_and_path() {
        let client =
            OpenAiChatClient::new(OpenAiConfig::new("k").with_base_url("http://localhost:1234/"))
                .unwrap();
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[tokio::test]
    async fn sends_wire_request_and_extracts_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 1000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "first"}},
                    {"message": {"role": "assistant", "content": "second"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).complete(&messages()).await.unwrap();

        assert_eq!(text, "first");
    }

    #[tokio::test]
    async fn rate_limited_response_carries_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "2000"))
            .mount(&server)
            .await;

        let failure = client_for(&server).complete(&messages()).await.unwrap_err();

        assert_eq!(failure.status(), Some(429));
        assert_eq!(failure.retry_after(), Some(Duration::from_millis(2000)));
    }

    #[tokio::test]
    async fn error_status_without_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let failure = client_for(&server).complete(&messages()).await.unwrap_err();

        assert_eq!(failure.status(), Some(401));
        assert_eq!(failure.retry_after(), None);
    }

    #[tokio::test]
    async fn empty_choices_is_a_statusless_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let failure = client_for(&server).complete(&messages()).await.unwrap_err();

        assert_eq!(failure.status(), None);
        assert!(failure.detail().contains("no choices"));
    }

    #[tokio::test]
    async fn timeout_is_a_statusless_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [{"message": {"content": "late"}}]}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = OpenAiChatClient::new(
            OpenAiConfig::new("test-key")
                .with_base_url(server.uri())
                .with_timeout(Some(Duration::from_millis(50))),
        )
        .unwrap();

        let failure = client.complete(&messages()).await.unwrap_err();

        assert_eq!(failure.status(), None);
    }
}
