//! # Application Layer
//!
//! Orchestration of prompt building, rate limiting, dispatch and retries,
//! plus the interfaces the connector layer implements.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
