//! Port definitions for the message subsystem.
//!
//! Ports define the configuration and abstract interfaces the core needs
//! from the outside world. Adapters implement them to reach real webhook
//! endpoints or to record requests in memory.

pub mod transport;
pub mod validator;

pub use transport::{
    DispatchReport, FilePart, PAYLOAD_FIELD, ResponseBody, TransportResult, WebhookRequest,
    WebhookResponse, WebhookTransport,
};
pub use validator::SchemaLimits;
