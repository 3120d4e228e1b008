//! Transport adapters for the message module.
//!
//! This module provides concrete implementations of the
//! [`WebhookTransport`] port.
//!
//! # Available Adapters
//!
//! - [`http::ReqwestTransport`]: multipart HTTP delivery via `reqwest`
//! - [`memory::RecordingTransport`]: in-memory recording for tests and dry
//!   runs
//!
//! [`WebhookTransport`]: crate::message::ports::transport::WebhookTransport

pub mod http;
pub mod memory;
