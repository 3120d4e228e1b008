//! HTTP implementation of the `WebhookTransport` port using `reqwest`.
//!
//! Each request becomes one multipart POST: the message JSON in the
//! `payload_json` text field and one file part per attachment.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use tracing::debug;

use crate::message::{
    error::TransportError,
    ports::transport::{
        FilePart, PAYLOAD_FIELD, ResponseBody, TransportResult, WebhookRequest, WebhookResponse,
        WebhookTransport,
    },
};

/// Configuration for [`ReqwestTransport`].
///
/// # Examples
///
/// ```
/// use hookcraft::message::adapters::http::HttpTransportConfig;
///
/// let config = HttpTransportConfig::default();
/// assert!(config.timeout.is_none());
/// assert!(config.user_agent.starts_with("hookcraft/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Whole-request timeout. `None` waits for as long as the connection
    /// stays open.
    pub timeout: Option<Duration>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("hookcraft/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: None,
        }
    }
}

impl HttpTransportConfig {
    /// Sets a whole-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Sends webhook requests over HTTP.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the TLS backend cannot be
    /// initialised.
    pub fn new() -> TransportResult<Self> {
        Self::with_config(&HttpTransportConfig::default())
    }

    /// Creates a transport from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the client cannot be built.
    pub fn with_config(config: &HttpTransportConfig) -> TransportResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::client)?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn build_form(payload_json: String, files: Vec<FilePart>) -> Form {
    files.into_iter().fold(
        Form::new().text(PAYLOAD_FIELD, payload_json),
        |form, file| form.part(file.field_name, Part::bytes(file.bytes).file_name(file.file_name)),
    )
}

#[async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn send(&self, request: WebhookRequest) -> TransportResult<WebhookResponse> {
        let WebhookRequest {
            url,
            payload_json,
            files,
        } = request;
        debug!(
            host = url.host_str().unwrap_or_default(),
            files = files.len(),
            "posting webhook request"
        );

        let response = self
            .client
            .post(url)
            .multipart(build_form(payload_json, files))
            .send()
            .await
            .map_err(TransportError::unreachable)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(TransportError::body)?;
        Ok(WebhookResponse {
            status,
            body: ResponseBody::from_text(text),
        })
    }
}

// Wire-format coverage lives in tests/http_transport.rs, which runs the
// transport against a local multipart server.
