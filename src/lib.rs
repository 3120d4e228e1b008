//! Hookcraft: compose, validate, and send chat webhook messages.
//!
//! A message can be edited field by field or as raw JSON; both views stay
//! consistent, every schema violation is reported with its location, and a
//! gate decides when the message may be sent as a multipart webhook request.
//!
//! # Architecture
//!
//! Hookcraft follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message data with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the webhook transport and the
//!   editor host
//! - **Adapters**: Concrete transports (HTTP via `reqwest`, in-memory)
//!
//! # Modules
//!
//! - [`message`]: Message model, JSON codec, validation, and dispatch
//! - [`editor`]: Edit coordination and the dispatch gate

pub mod editor;
pub mod message;
