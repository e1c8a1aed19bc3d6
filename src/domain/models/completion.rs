use std::time::Duration;

/// A failed chat-completion exchange, before classification.
///
/// `status` is `None` when no HTTP response was obtained (connection error,
/// timeout) or when a successful response could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionFailure {
    status: Option<u16>,
    retry_after: Option<Duration>,
    detail: String,
}

impl CompletionFailure {
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            retry_after: None,
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            retry_after: None,
            detail: detail.into(),
        }
    }

    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl std::fmt::Display for CompletionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}: {}", self.detail),
            None => write!(f, "transport: {}", self.detail),
        }
    }
}
