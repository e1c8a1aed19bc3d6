use crate::domain::{CompletionFailure, ErrorKind};

/// Map an HTTP status (or its absence) to an [`ErrorKind`].
pub fn classify_status(status: Option<u16>) -> ErrorKind {
    match status {
        Some(401) => ErrorKind::Unauthorized,
        Some(429) => ErrorKind::RateLimited,
        Some(500) => ErrorKind::ServerFault,
        _ => ErrorKind::Unknown,
    }
}

pub fn classify(failure: &CompletionFailure) -> ErrorKind {
    classify_status(failure.status())
}
