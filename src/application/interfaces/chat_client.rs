use async_trait::async_trait;

use crate::domain::{CompletionFailure, Message};

/// An interface for sending a role-tagged message sequence to a chat-completion
/// provider and receiving the reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details (model id, temperature, output length). Consumers such as
/// [`crate::application::AdvisorClient`] only see the reply text or an
/// unclassified [`CompletionFailure`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Dispatch one request and return the first choice's text content.
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionFailure>;

    fn model_name(&self) -> &str;
}
