//! # Domain Layer
//!
//! Messages, financial records, the error taxonomy, and the pure rules that
//! shape prompts and decide retries. Independent of HTTP and runtime details.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
