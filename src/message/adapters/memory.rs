//! In-memory implementation of the `WebhookTransport` port.
//!
//! Records every request and answers with a canned response. Used by tests
//! and by the command line's dry-run mode; nothing leaves the process.

use std::fmt;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::message::{
    error::TransportError,
    ports::transport::{
        ResponseBody, TransportResult, WebhookRequest, WebhookResponse, WebhookTransport,
    },
};

/// Error reported when the recording lock was poisoned by a panicking
/// writer.
#[derive(Debug)]
struct LockPoisoned;

impl fmt::Display for LockPoisoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("recording transport lock poisoned")
    }
}

impl std::error::Error for LockPoisoned {}

/// In-memory implementation of [`WebhookTransport`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same recording.
///
/// # Example
///
/// ```
/// use hookcraft::message::adapters::memory::RecordingTransport;
///
/// let transport = RecordingTransport::new();
/// assert!(transport.requests().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    requests: Arc<RwLock<Vec<WebhookRequest>>>,
    response: WebhookResponse,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransport {
    /// Creates a transport that answers `200 {"recorded": true}`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_response(WebhookResponse {
            status: 200,
            body: ResponseBody::Json(json!({ "recorded": true })),
        })
    }

    /// Creates a transport that answers every request with `response`.
    #[must_use]
    pub fn with_response(response: WebhookResponse) -> Self {
        Self {
            requests: Arc::new(RwLock::new(Vec::new())),
            response,
        }
    }

    /// Returns a copy of every request sent so far, oldest first.
    ///
    /// Returns an empty list if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<WebhookRequest> {
        self.requests
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn send(&self, request: WebhookRequest) -> TransportResult<WebhookResponse> {
        let mut guard = self
            .requests
            .write()
            .map_err(|_| TransportError::unreachable(LockPoisoned))?;
        guard.push(request);
        Ok(self.response.clone())
    }
}
