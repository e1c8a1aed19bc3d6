use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::{CompletionFailure, Message, Role};

/// Offline [`ChatClient`] that answers deterministically without network access.
///
/// The reply quotes the last user message so callers can see what was sent.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionFailure> {
        let request = messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(|m| m.content())
            .unwrap_or_default();

        Ok(format!(
            "[mock advice] {} message(s) received.\nRequest: {}",
            messages.len(),
            request
        ))
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_quotes_last_user_message() {
        let client = MockChatClient::new();
        let messages = vec![
            Message::system("instructions"),
            Message::user("first"),
            Message::assistant("reply"),
            Message::user("second"),
        ];

        let text = client.complete(&messages).await.unwrap();

        assert!(text.contains("4 message(s)"));
        assert!(text.ends_with("Request: second"));
    }

    #[tokio::test]
    async fn test_mock_chat_is_deterministic() {
        let client = MockChatClient::new();
        let messages = vec![Message::user("same")];

        let a = client.complete(&messages).await.unwrap();
        let b = client.complete(&messages).await.unwrap();

        assert_eq!(a, b);
    }
}
