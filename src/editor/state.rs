//! The editor's single owned state value.

use crate::message::{
    domain::{Attachment, Message},
    error::ValidationError,
};

/// Everything the editor knows at one point in time.
///
/// Only [`EditCoordinator`](super::EditCoordinator) mutates this; everyone
/// else reads a borrowed snapshot.
///
/// `json` matches `message` except while the user is typing JSON that does
/// not parse; then `json` holds the raw text and `message` the last message
/// that did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub(crate) message: Message,
    pub(crate) json: String,
    pub(crate) errors: Vec<ValidationError>,
    pub(crate) files: Option<Vec<Attachment>>,
    pub(crate) endpoint: String,
    pub(crate) in_flight: bool,
    pub(crate) text_has_payload: bool,
}

impl EditorState {
    /// Returns the current message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the JSON text shown in the raw editor.
    #[must_use]
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Returns the errors for the current JSON text, in display order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the file selection. `None` means nothing was selected;
    /// `Some` with no files is an explicit empty selection.
    #[must_use]
    pub fn files(&self) -> Option<&[Attachment]> {
        self.files.as_deref()
    }

    /// Returns the webhook endpoint as entered.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns `true` when the message, or the JSON text it came from,
    /// carries content or embeds.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.message.has_payload() || self.text_has_payload
    }

    /// Returns `true` while a dispatch is outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
