//! Port through which the editor talks to whatever embeds it.

use crate::message::{domain::Message, error::ValidationError};

/// Callbacks the embedding surface provides to the editor.
///
/// `message_changed` fires whenever the editor adopts a new structured
/// message. The remaining callbacks have no-op defaults.
#[cfg_attr(test, mockall::automock)]
pub trait EditorHost {
    /// The editor adopted `message` as its current message.
    fn message_changed(&mut self, message: &Message);

    /// The error list changed. Not called when a re-check yields the same
    /// list.
    fn errors_changed(&mut self, _errors: &[ValidationError]) {}

    /// The user asked to switch theme.
    fn toggle_theme(&mut self) {}

    /// The user asked to switch the display mode.
    fn toggle_display(&mut self) {}
}

/// Host that ignores every notification, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessHost;

impl EditorHost for HeadlessHost {
    fn message_changed(&mut self, _message: &Message) {}
}
