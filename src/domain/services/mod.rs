//! Domain services containing the pure request-shaping and failure-handling rules.

mod error_classifier;
mod prompt_builder;
mod retry_policy;

pub use error_classifier::*;
pub use prompt_builder::*;
pub use retry_policy::*;
