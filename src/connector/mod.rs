//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (OpenAI-compatible), plus an offline mock
//! - Tokio-backed time source
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
