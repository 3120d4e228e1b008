//! Dispatch Gate: decides whether the send action is currently permitted.

use thiserror::Error;

use super::EditorState;

/// Why sending is not allowed right now.
///
/// Variants are listed in the order the gate checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchBlocker {
    /// A previous dispatch has not finished.
    #[error("a dispatch is already in flight")]
    InFlight,

    /// The endpoint is empty or whitespace.
    #[error("webhook endpoint is empty")]
    MissingEndpoint,

    /// The message has content or embeds and the JSON has errors.
    #[error("message has validation errors")]
    InvalidMessage,

    /// Files were selected but the selection is empty.
    #[error("file selection is empty")]
    EmptyFileSelection,
}

/// Result of evaluating the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchGate {
    /// Sending is permitted.
    Allowed,
    /// Sending is refused for the given reason.
    Blocked(DispatchBlocker),
}

impl DispatchGate {
    /// Returns `true` when sending is permitted.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the blocking reason, if any.
    #[must_use]
    pub const fn blocker(self) -> Option<DispatchBlocker> {
        match self {
            Self::Allowed => None,
            Self::Blocked(blocker) => Some(blocker),
        }
    }
}

/// Evaluates the gate for a state snapshot.
///
/// An empty message (no content, no embeds, not even invalid ones in the
/// JSON text) passes even when the error list is stale, so a cleared editor can always be sent. Having no file
/// selection at all does not block; an empty selection does.
#[must_use]
pub fn dispatch_gate(state: &EditorState) -> DispatchGate {
    let blocker = if state.in_flight {
        Some(DispatchBlocker::InFlight)
    } else if state.endpoint.trim().is_empty() {
        Some(DispatchBlocker::MissingEndpoint)
    } else if state.has_payload() && !state.errors.is_empty() {
        Some(DispatchBlocker::InvalidMessage)
    } else if state.files.as_ref().is_some_and(Vec::is_empty) {
        Some(DispatchBlocker::EmptyFileSelection)
    } else {
        None
    };
    blocker.map_or(DispatchGate::Allowed, DispatchGate::Blocked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{
        domain::{Attachment, Embed, Message},
        error::ValidationError,
    };
    use rstest::{fixture, rstest};

    fn stale_error() -> ValidationError {
        ValidationError::UnknownProperty {
            path: "tts".to_owned(),
        }
    }

    #[fixture]
    fn ready() -> EditorState {
        EditorState {
            message: Message::default().with_content("hi"),
            json: "{\n  \"content\": \"hi\"\n}".to_owned(),
            endpoint: "https://hooks.example/w".to_owned(),
            ..EditorState::default()
        }
    }

    #[rstest]
    fn valid_message_with_endpoint_is_allowed(ready: EditorState) {
        assert_eq!(dispatch_gate(&ready), DispatchGate::Allowed);
    }

    #[rstest]
    #[case("")]
    #[case("   \t")]
    fn blank_endpoint_blocks(mut ready: EditorState, #[case] endpoint: &str) {
        ready.endpoint = endpoint.to_owned();
        assert_eq!(
            dispatch_gate(&ready),
            DispatchGate::Blocked(DispatchBlocker::MissingEndpoint)
        );
    }

    #[rstest]
    fn in_flight_blocks_regardless_of_everything_else(mut ready: EditorState) {
        ready.in_flight = true;
        ready.endpoint.clear();
        ready.errors = vec![stale_error()];
        ready.files = Some(Vec::new());
        assert_eq!(
            dispatch_gate(&ready),
            DispatchGate::Blocked(DispatchBlocker::InFlight)
        );
    }

    #[rstest]
    fn clearing_in_flight_restores_previous_result(mut ready: EditorState) {
        let before = dispatch_gate(&ready);
        ready.in_flight = true;
        assert!(!dispatch_gate(&ready).is_allowed());
        ready.in_flight = false;
        assert_eq!(dispatch_gate(&ready), before);
    }

    #[rstest]
    fn errors_block_a_message_with_payload(mut ready: EditorState) {
        ready.errors = vec![stale_error()];
        assert_eq!(
            dispatch_gate(&ready).blocker(),
            Some(DispatchBlocker::InvalidMessage)
        );
    }

    #[rstest]
    fn errors_block_a_message_with_embeds(mut ready: EditorState) {
        ready.message = Message::default().with_embed(Embed::default().with_title("t"));
        ready.errors = vec![stale_error()];
        assert_eq!(
            dispatch_gate(&ready).blocker(),
            Some(DispatchBlocker::InvalidMessage)
        );
    }

    #[rstest]
    fn empty_message_bypasses_stale_errors(mut ready: EditorState) {
        ready.message = Message::default();
        ready.json = "{}".to_owned();
        ready.errors = vec![stale_error()];
        assert!(dispatch_gate(&ready).is_allowed());
    }

    #[rstest]
    fn dropped_embeds_in_the_text_still_block(mut ready: EditorState) {
        ready.message = Message::default();
        ready.json = r#"{ "embeds": [1] }"#.to_owned();
        ready.text_has_payload = true;
        ready.errors = vec![stale_error()];
        assert_eq!(
            dispatch_gate(&ready).blocker(),
            Some(DispatchBlocker::InvalidMessage)
        );
    }

    #[rstest]
    fn explicit_empty_file_selection_blocks(mut ready: EditorState) {
        ready.files = Some(Vec::new());
        assert_eq!(
            dispatch_gate(&ready).blocker(),
            Some(DispatchBlocker::EmptyFileSelection)
        );
    }

    #[rstest]
    fn non_empty_file_selection_is_allowed(mut ready: EditorState) {
        ready.files = Some(vec![Attachment::new("a.txt", b"a".to_vec())]);
        assert!(dispatch_gate(&ready).is_allowed());
    }
}
