//! Edit Coordinator: keeps the structured message, its JSON text, and the
//! error list consistent across every kind of edit.

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{
    EditorHost, EditorState,
    gate::{DispatchBlocker, DispatchGate, dispatch_gate},
};
use crate::message::{
    domain::{Attachment, Embed, Message},
    error::{DispatchError, DispatchResult, ValidationError},
    json::{ParseReport, parse_message_with, stringify_message},
    ports::transport::{DispatchReport, WebhookTransport},
    services::Dispatcher,
    validation::SchemaValidator,
};

/// Errors from [`EditCoordinator::dispatch`].
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// The gate refused the dispatch; nothing was sent.
    #[error("dispatch blocked: {0}")]
    Blocked(#[from] DispatchBlocker),

    /// The dispatch was attempted and failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Everything captured from the editor when a dispatch starts.
///
/// Later edits do not affect a ticket already handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTicket {
    endpoint: String,
    payload_json: String,
    files: Vec<Attachment>,
}

impl DispatchTicket {
    /// Returns the endpoint to send to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the JSON text exactly as shown when the dispatch began.
    #[must_use]
    pub fn payload_json(&self) -> &str {
        &self.payload_json
    }

    /// Returns the files to upload; empty when none were selected.
    #[must_use]
    pub fn files(&self) -> &[Attachment] {
        &self.files
    }
}

/// Owns the editor state and applies every transition to it.
///
/// Structured edits re-serialize the message, so the JSON text always
/// matches. Raw JSON edits keep the text verbatim and only adopt the parsed
/// message when the text at least parsed to an object; otherwise the last
/// good message stays.
///
/// # Example
///
/// ```
/// use hookcraft::editor::{EditCoordinator, HeadlessHost};
/// use hookcraft::message::domain::Message;
///
/// let mut editor = EditCoordinator::new(Message::default(), HeadlessHost);
/// editor.edit_json("{");
/// assert_eq!(editor.state().json(), "{");
/// assert_eq!(editor.state().message(), &Message::default());
/// assert_eq!(editor.state().errors().len(), 1);
/// ```
#[derive(Debug)]
pub struct EditCoordinator<H> {
    state: EditorState,
    initial: Message,
    validator: SchemaValidator,
    host: H,
}

impl<H: EditorHost> EditCoordinator<H> {
    /// Creates a coordinator for `initial` with default schema limits.
    #[must_use]
    pub fn new(initial: Message, host: H) -> Self {
        Self::with_validator(initial, host, SchemaValidator::new())
    }

    /// Creates a coordinator that validates with `validator`.
    ///
    /// The initial message is checked immediately so the error list always
    /// describes the JSON text on display.
    #[must_use]
    pub fn with_validator(initial: Message, host: H, validator: SchemaValidator) -> Self {
        let json = stringify_message(&initial);
        let report = parse_message_with(&json, &validator);
        Self {
            state: EditorState {
                message: initial.clone(),
                json,
                text_has_payload: report.has_payload(),
                errors: report.errors,
                ..EditorState::default()
            },
            initial,
            validator,
            host,
        }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns `true` while the message equals the one the editor started
    /// with.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.state.message == self.initial
    }

    /// Replaces the structured message, as the form editors do.
    pub fn edit_message(&mut self, message: Message) {
        debug!("structured edit");
        self.state.message = message;
        self.state.json = stringify_message(&self.state.message);
        let report = parse_message_with(&self.state.json, &self.validator);
        self.state.text_has_payload = report.has_payload();
        self.replace_errors(report.errors);
        self.host.message_changed(&self.state.message);
    }

    /// Sets the message content; an empty string removes it.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let message = Message {
            content: non_empty(content.into()),
            ..self.state.message.clone()
        };
        self.edit_message(message);
    }

    /// Replaces the embed list; an empty list removes it.
    pub fn set_embeds(&mut self, embeds: Vec<Embed>) {
        let message = Message {
            embeds: (!embeds.is_empty()).then_some(embeds),
            ..self.state.message.clone()
        };
        self.edit_message(message);
    }

    /// Sets the username override; an empty string removes it.
    pub fn set_username(&mut self, username: impl Into<String>) {
        let message = Message {
            username: non_empty(username.into()),
            ..self.state.message.clone()
        };
        self.edit_message(message);
    }

    /// Sets the avatar override; an empty string removes it.
    pub fn set_avatar_url(&mut self, avatar_url: impl Into<String>) {
        let message = Message {
            avatar_url: non_empty(avatar_url.into()),
            ..self.state.message.clone()
        };
        self.edit_message(message);
    }

    /// Replaces the raw JSON text.
    ///
    /// The text is kept exactly as typed. When it is not even a JSON object
    /// the structured message is left alone and only the error list
    /// changes.
    pub fn edit_json(&mut self, text: impl Into<String>) {
        self.state.json = text.into();
        let report = parse_message_with(&self.state.json, &self.validator);
        let fallback = report.is_fallback();
        let has_payload = report.has_payload();
        let ParseReport { message, errors, .. } = report;
        self.replace_errors(errors);
        if fallback {
            debug!("raw edit kept previous message");
            return;
        }
        debug!("raw edit adopted parsed message");
        self.state.message = message;
        self.state.text_has_payload = has_payload;
        self.host.message_changed(&self.state.message);
    }

    /// Replaces the file selection. `Some(vec![])` is an explicit empty
    /// selection and blocks sending until changed.
    pub fn select_files(&mut self, files: Option<Vec<Attachment>>) {
        debug!(
            selected = files.as_ref().map(Vec::len),
            "file selection changed"
        );
        self.state.files = files;
    }

    /// Sets the webhook endpoint text.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint = endpoint.into();
    }

    /// Resets the message to the empty message.
    pub fn clear_all(&mut self) {
        info!("clearing message");
        self.edit_message(Message::default());
    }

    /// Forwards a theme toggle to the host.
    pub fn toggle_theme(&mut self) {
        self.host.toggle_theme();
    }

    /// Forwards a display toggle to the host.
    pub fn toggle_display(&mut self) {
        self.host.toggle_display();
    }

    /// Evaluates the dispatch gate for the current state.
    #[must_use]
    pub fn gate(&self) -> DispatchGate {
        dispatch_gate(&self.state)
    }

    /// Marks a dispatch as in flight and captures what to send.
    ///
    /// Editing stays possible while the ticket is outstanding; only another
    /// dispatch is refused until [`Self::complete_dispatch`] runs.
    ///
    /// # Errors
    ///
    /// Returns the [`DispatchBlocker`] when the gate refuses.
    pub fn begin_dispatch(&mut self) -> Result<DispatchTicket, DispatchBlocker> {
        if let DispatchGate::Blocked(blocker) = self.gate() {
            debug!(%blocker, "dispatch refused");
            return Err(blocker);
        }
        self.state.in_flight = true;
        Ok(DispatchTicket {
            endpoint: self.state.endpoint.clone(),
            payload_json: self.state.json.clone(),
            files: self.state.files.clone().unwrap_or_default(),
        })
    }

    /// Clears the in-flight flag once a dispatch has finished, whatever the
    /// outcome.
    pub fn complete_dispatch(&mut self, outcome: &DispatchResult<DispatchReport>) {
        self.state.in_flight = false;
        match outcome {
            Ok(report) if report.response.is_success() => {
                info!(status = report.response.status, "dispatch completed");
            }
            Ok(report) => {
                warn!(status = report.response.status, "webhook rejected message");
            }
            Err(err) => warn!(error = %err, "dispatch failed"),
        }
    }

    /// Runs a full dispatch: gate, send, and clear the in-flight flag.
    ///
    /// The flag is also cleared when the returned future is dropped before
    /// the send finishes, for example by a timeout around it.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Blocked`] when the gate refuses and
    /// [`SendError::Dispatch`] when the dispatcher fails.
    pub async fn dispatch<T, C>(
        &mut self,
        dispatcher: &Dispatcher<T, C>,
    ) -> Result<DispatchReport, SendError>
    where
        T: WebhookTransport,
        C: Clock + Send + Sync,
    {
        let ticket = self.begin_dispatch()?;
        let guard = InFlightGuard(&mut self.state.in_flight);
        let outcome = dispatcher
            .execute(ticket.endpoint(), ticket.payload_json(), ticket.files())
            .await;
        drop(guard);
        self.complete_dispatch(&outcome);
        outcome.map_err(SendError::from)
    }

    fn replace_errors(&mut self, errors: Vec<ValidationError>) {
        if errors == self.state.errors {
            self.state.errors = errors;
            return;
        }
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(count = errors.len(), errors = %joined, "JSON validation errors occurred");
        }
        self.state.errors = errors;
        self.host.errors_changed(&self.state.errors);
    }
}

/// Clears the in-flight flag when dropped.
struct InFlightGuard<'a>(&'a mut bool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
