//! Parsing JSON text back into a message.

use serde_json::{Map, Value};

use crate::message::{
    domain::Message,
    error::ValidationError,
    validation::{SchemaValidator, schema::describe_value},
};

/// Outcome of parsing message JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Best-effort message; the empty message when the text is not a JSON
    /// object at all.
    pub message: Message,
    /// Every violation found, in display order.
    pub errors: Vec<ValidationError>,
    has_payload: bool,
}

impl ParseReport {
    fn fallback(error: ValidationError) -> Self {
        Self {
            message: Message::default(),
            errors: vec![error],
            has_payload: false,
        }
    }

    /// Returns `true` when the text is schema-valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` when the text was not a JSON object, so `message` is
    /// only the empty fallback and should not replace an existing message.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.errors.iter().any(ValidationError::is_structural)
    }

    /// Returns `true` when the text itself carried content or embeds.
    ///
    /// Unlike [`Message::has_payload`] this also counts values the
    /// validator dropped, so `{ "embeds": [1] }` has a payload even though
    /// its message has no embeds.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        self.has_payload
    }
}

/// Parses message JSON with the default schema limits.
///
/// Never panics and never fails: malformed text yields the empty message and
/// a structural error, and schema violations yield a partial message plus
/// the list of violations.
///
/// # Examples
///
/// ```
/// use hookcraft::message::json::parse_message;
///
/// let report = parse_message("{");
/// assert!(report.is_fallback());
/// assert!(report.message.is_empty());
///
/// let report = parse_message(r#"{ "content": "hi" }"#);
/// assert!(report.is_valid());
/// ```
#[must_use]
pub fn parse_message(text: &str) -> ParseReport {
    parse_message_with(text, &SchemaValidator::new())
}

/// Parses message JSON with a specific validator.
#[must_use]
pub fn parse_message_with(text: &str, validator: &SchemaValidator) -> ParseReport {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            return ParseReport::fallback(ValidationError::Syntax {
                line: err.line(),
                column: err.column(),
                reason: err.to_string(),
            });
        }
    };

    let Value::Object(object) = &value else {
        return ParseReport::fallback(ValidationError::NotAnObject {
            found: describe_value(&value),
        });
    };

    let report = validator.validate(object);
    ParseReport {
        message: report.message,
        errors: report.errors,
        has_payload: object_has_payload(object),
    }
}

fn object_has_payload(object: &Map<String, Value>) -> bool {
    let content = object
        .get("content")
        .is_some_and(|value| !value.is_null() && value.as_str() != Some(""));
    let embeds = object.get("embeds").is_some_and(|value| match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    });
    content || embeds
}
