use serde::{Deserialize, Serialize};

/// Closed set of provider failure categories.
///
/// The kind decides both retry eligibility and the message shown to the user;
/// it never depends on the concrete transport error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// HTTP 401. Never retried.
    Unauthorized,
    /// HTTP 429. The only retryable kind.
    RateLimited,
    /// HTTP 500. Not retried.
    ServerFault,
    /// Any other status, network failure, timeout or malformed reply.
    Unknown,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Unauthorized,
        ErrorKind::RateLimited,
        ErrorKind::ServerFault,
        ErrorKind::Unknown,
    ];

    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "invalid API key",
            ErrorKind::RateLimited => "system overloaded, retry later",
            ErrorKind::ServerFault => "server error, retry later",
            ErrorKind::Unknown => "cannot reach assistant, retry later",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerFault => "server_fault",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
