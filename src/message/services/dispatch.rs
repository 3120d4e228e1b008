//! Dispatch service: turns the editor's JSON text and file selection into a
//! webhook request and runs it through a transport.

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info};
use url::Url;

use crate::message::{
    domain::Attachment,
    error::{DispatchError, DispatchResult},
    ports::transport::{DispatchReport, FilePart, WebhookRequest, WebhookTransport},
};

/// Query flag asking the endpoint to respond only once the message exists.
const WAIT_PARAM: &str = "wait";

/// Service that executes webhook dispatches.
///
/// The dispatcher does not look at HTTP status codes: whatever the endpoint
/// answers is returned in the [`DispatchReport`]. Only failures to obtain a
/// response at all are errors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use hookcraft::message::{
///     adapters::memory::RecordingTransport, services::Dispatcher,
/// };
/// use mockable::DefaultClock;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let transport = Arc::new(RecordingTransport::new());
/// let dispatcher = Dispatcher::new(Arc::clone(&transport), Arc::new(DefaultClock));
/// let report = dispatcher
///     .execute("https://hooks.example/api/webhooks/1/abc", "{}", &[])
///     .await
///     .expect("dispatch");
/// assert_eq!(report.response.status, 200);
/// # }
/// ```
#[derive(Debug)]
pub struct Dispatcher<T, C>
where
    T: WebhookTransport,
    C: Clock + Send + Sync,
{
    transport: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> Clone for Dispatcher<T, C>
where
    T: WebhookTransport,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, C> Dispatcher<T, C>
where
    T: WebhookTransport,
    C: Clock + Send + Sync,
{
    /// Creates a new dispatcher.
    #[must_use]
    pub const fn new(transport: Arc<T>, clock: Arc<C>) -> Self {
        Self { transport, clock }
    }

    /// Sends `payload_json` and `files` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidEndpoint`] when the endpoint is not an
    /// http or https URL, and [`DispatchError::Transport`] when the endpoint
    /// cannot be reached.
    pub async fn execute(
        &self,
        endpoint: &str,
        payload_json: &str,
        files: &[Attachment],
    ) -> DispatchResult<DispatchReport> {
        let request = prepare_request(endpoint, payload_json, files)?;
        let host = request.url.host_str().unwrap_or_default().to_owned();
        let attachments = request.files.len();
        info!(%host, attachments, "dispatching webhook message");

        match self.transport.send(request).await {
            Ok(response) => {
                info!(%host, status = response.status, "webhook responded");
                Ok(DispatchReport {
                    response,
                    attachments,
                    completed_at: self.clock.utc(),
                })
            }
            Err(err) => {
                error!(%host, error = %err, "webhook dispatch failed");
                Err(err.into())
            }
        }
    }
}

/// Builds the webhook request for an endpoint, JSON text, and file list.
///
/// The endpoint gets `wait=true` (replacing any existing `wait` flag) and
/// each file becomes a `file[<index>]` part keeping its original name.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidEndpoint`] when the endpoint does not
/// parse as an http or https URL.
pub fn prepare_request(
    endpoint: &str,
    payload_json: &str,
    files: &[Attachment],
) -> DispatchResult<WebhookRequest> {
    let url = endpoint_url(endpoint)?;
    let files = files
        .iter()
        .enumerate()
        .map(|(index, attachment)| FilePart {
            field_name: format!("file[{index}]"),
            file_name: attachment.file_name().to_owned(),
            bytes: attachment.bytes().to_vec(),
        })
        .collect();

    Ok(WebhookRequest {
        url,
        payload_json: payload_json.to_owned(),
        files,
    })
}

fn endpoint_url(endpoint: &str) -> DispatchResult<Url> {
    let mut url = Url::parse(endpoint.trim())
        .map_err(|err| DispatchError::invalid_endpoint(endpoint, err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DispatchError::invalid_endpoint(
            endpoint,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != WAIT_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(WAIT_PARAM, "true");
    Ok(url)
}
