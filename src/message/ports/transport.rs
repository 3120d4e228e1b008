//! Port for delivering a composed message to a webhook endpoint.
//!
//! The transport receives a fully built [`WebhookRequest`] and returns
//! whatever the endpoint answered. It does not interpret HTTP status codes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::message::error::TransportError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Multipart field that carries the message JSON.
pub const PAYLOAD_FIELD: &str = "payload_json";

/// One uploaded file within a webhook request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Multipart field name, `file[<index>]`.
    pub field_name: String,
    /// Original file name.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// A multipart webhook request ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    /// Endpoint including the `wait=true` query flag.
    pub url: Url,
    /// Message JSON text sent as the [`PAYLOAD_FIELD`] field.
    pub payload_json: String,
    /// Files in selection order.
    pub files: Vec<FilePart>,
}

/// Body returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// The body was valid JSON.
    Json(Value),
    /// The body was not JSON; kept verbatim.
    Text(String),
    /// The body was empty.
    Empty,
}

impl ResponseBody {
    /// Classifies a raw response body.
    #[must_use]
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        serde_json::from_str(&text).map_or(Self::Text(text), Self::Json)
    }
}

/// What the endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: ResponseBody,
}

impl WebhookResponse {
    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Outcome of a completed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Response as received, whatever its status.
    pub response: WebhookResponse,
    /// Number of files uploaded with the message.
    pub attachments: usize,
    /// When the response was received.
    pub completed_at: DateTime<Utc>,
}

/// Port for sending webhook requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Sends the request and returns the endpoint's response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    async fn send(&self, request: WebhookRequest) -> TransportResult<WebhookResponse>;
}
