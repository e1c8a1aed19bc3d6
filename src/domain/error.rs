use thiserror::Error;

use super::models::ErrorKind;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A terminal, classified failure of the chat-completion provider.
    ///
    /// The `Display` output is the fixed user-facing message for `kind`;
    /// `detail` keeps the transport-level reason for logs.
    #[error("{}", .kind.user_message())]
    Completion { kind: ErrorKind, detail: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn completion(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self::Completion {
            kind,
            detail: detail.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The classified provider error kind, if this is a completion failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Completion { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_completion_error(&self) -> bool {
        matches!(self, Self::Completion { .. })
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_error_displays_user_message() {
        let err = DomainError::completion(ErrorKind::Unauthorized, "HTTP 401: bad key");
        assert_eq!(err.to_string(), "invalid API key");
        assert_eq!(err.kind(), Some(ErrorKind::Unauthorized));
        assert!(err.is_completion_error());
    }

    #[test]
    fn non_completion_error_has_no_kind() {
        let err = DomainError::invalid_input("income must be finite");
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "Invalid input: income must be finite");
    }
}
