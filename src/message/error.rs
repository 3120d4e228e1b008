//! Domain error types for message validation and dispatch.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use std::sync::Arc;
use thiserror::Error;

/// A single schema violation found while parsing message JSON.
///
/// The `Display` output is the human-readable description shown next to the
/// JSON editor. Every schema variant carries the JSON path of the offending
/// value, for example `embeds[0].fields[2].name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {reason}")]
    Syntax {
        /// 1-based line of the failure.
        line: usize,
        /// Column of the failure; 0 when the text ended early.
        column: usize,
        /// Description from the JSON decoder, including the location.
        reason: String,
    },

    /// The text is JSON but not an object.
    #[error("message must be an object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A value has the wrong JSON type.
    #[error("{path} must be {expected}, found {found}")]
    TypeMismatch {
        /// Location of the value.
        path: String,
        /// Description of the expected type.
        expected: &'static str,
        /// JSON type that was found.
        found: &'static str,
    },

    /// A required property is absent.
    #[error("{path} is required")]
    MissingProperty {
        /// Location of the missing property.
        path: String,
    },

    /// A property is not part of the message schema.
    #[error("{path} is not a known property")]
    UnknownProperty {
        /// Location of the unexpected property.
        path: String,
    },

    /// A text value exceeds its length ceiling.
    #[error("{path} must be at most {limit} characters long, found {actual}")]
    TooLong {
        /// Location of the value.
        path: String,
        /// Maximum allowed characters.
        limit: usize,
        /// Actual character count.
        actual: usize,
    },

    /// A list exceeds its item ceiling.
    #[error("{path} must contain at most {limit} items, found {actual}")]
    TooMany {
        /// Location of the list.
        path: String,
        /// Maximum allowed items.
        limit: usize,
        /// Actual item count.
        actual: usize,
    },

    /// A number falls outside its allowed range.
    #[error("{path} must be between {min} and {max}, found {actual}")]
    OutOfRange {
        /// Location of the value.
        path: String,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Actual value.
        actual: i64,
    },

    /// A timestamp is not ISO 8601.
    #[error("{path} must be an ISO 8601 timestamp")]
    InvalidTimestamp {
        /// Location of the value.
        path: String,
    },

    /// A link is not an absolute http, https, or attachment URL.
    #[error("{path} must be an http, https or attachment URL")]
    InvalidUrl {
        /// Location of the value.
        path: String,
    },

    /// The embeds together exceed the combined character ceiling.
    #[error("embeds must contain at most {limit} characters in total, found {actual}")]
    EmbedsTooLarge {
        /// Maximum allowed characters across all embeds.
        limit: usize,
        /// Actual character count.
        actual: usize,
    },

    /// The sanitised JSON could not be turned into a message.
    #[error("message could not be built: {0}")]
    Unrepresentable(String),
}

impl ValidationError {
    /// Returns `true` when the text could not be read as a JSON object at all.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Syntax { .. } | Self::NotAnObject { .. })
    }

    /// Returns `true` for violations of a named schema constraint.
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        matches!(
            self,
            Self::TooLong { .. }
                | Self::TooMany { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidTimestamp { .. }
                | Self::InvalidUrl { .. }
                | Self::EmbedsTooLarge { .. }
        )
    }
}

/// Errors raised by a [`WebhookTransport`](crate::message::ports::WebhookTransport).
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(Arc<dyn std::error::Error + Send + Sync>),

    /// The request never produced a response.
    #[error("webhook endpoint unreachable: {0}")]
    Unreachable(Arc<dyn std::error::Error + Send + Sync>),

    /// The response arrived but its body could not be read.
    #[error("failed to read webhook response: {0}")]
    Body(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Creates a client construction error from any error type.
    #[must_use]
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Arc::new(err))
    }

    /// Creates a connection failure from any error type.
    #[must_use]
    pub fn unreachable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unreachable(Arc::new(err))
    }

    /// Creates a body read failure from any error type.
    #[must_use]
    pub fn body(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Body(Arc::new(err))
    }
}

/// Errors that can occur while dispatching a message.
///
/// Non-2xx responses are not errors at this layer; they are reported in the
/// [`DispatchReport`](crate::message::ports::DispatchReport) as received.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The endpoint string is not a usable URL.
    #[error("invalid webhook endpoint: {reason}")]
    InvalidEndpoint {
        /// Endpoint as entered.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The transport failed before a response was available.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DispatchError {
    /// Creates an invalid endpoint error.
    #[must_use]
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
