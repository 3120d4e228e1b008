//! Message model, JSON codec, schema validation, and webhook dispatch.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types ([`domain::Message`], [`domain::Embed`], [`domain::Attachment`])
//! - **JSON**: Canonical text form ([`json::stringify_message`], [`json::parse_message`])
//! - **Validation**: Schema tables and named constraints ([`validation::SchemaValidator`])
//! - **Ports**: Configuration and abstract interfaces ([`ports::SchemaLimits`], [`ports::WebhookTransport`])
//! - **Adapters**: Concrete transports ([`adapters::http::ReqwestTransport`], [`adapters::memory::RecordingTransport`])
//! - **Services**: Workflows over ports ([`services::Dispatcher`])
//!
//! # Example
//!
//! ```
//! use hookcraft::message::{
//!     domain::{Embed, Message},
//!     json::{parse_message, stringify_message},
//! };
//!
//! let message = Message::default()
//!     .with_content("Deploy finished")
//!     .with_embed(Embed::default().with_title("api").with_color(0x2ECC71));
//!
//! let text = stringify_message(&message);
//! let report = parse_message(&text);
//! assert!(report.errors.is_empty());
//! assert_eq!(report.message, message);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod json;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
