//! Validation service combining the structural and constraint passes.

use serde_json::{Map, Value};

use super::{
    rules,
    schema::{JsonPath, ObjectKind, ValueKind},
    structure,
};
use crate::message::{domain::Message, error::ValidationError, ports::validator::SchemaLimits};

/// Result of validating a decoded JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    /// Best-effort message built from the well-shaped parts of the input.
    pub message: Message,
    /// Violations: structural first, then constraints in input order.
    pub errors: Vec<ValidationError>,
}

/// Validates message objects against the schema.
///
/// Applies every rule and collects all errors rather than failing on the
/// first one. Structural errors (types, required and unknown keys) come
/// first, then named constraint violations in the order the offending
/// values appear in the input, then aggregate checks.
///
/// # Examples
///
/// ```
/// use hookcraft::message::validation::SchemaValidator;
/// use serde_json::json;
///
/// let validator = SchemaValidator::new();
/// let object = json!({ "content": "hi" });
/// let report = validator.validate(object.as_object().expect("object"));
/// assert!(report.errors.is_empty());
/// assert_eq!(report.message.content.as_deref(), Some("hi"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    limits: SchemaLimits,
}

impl SchemaValidator {
    /// Creates a validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_limits(limits: SchemaLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits in use.
    #[must_use]
    pub const fn limits(&self) -> &SchemaLimits {
        &self.limits
    }

    /// Validates a decoded top-level object.
    #[must_use]
    pub fn validate(&self, object: &Map<String, Value>) -> SchemaReport {
        let mut errors = Vec::new();
        let sanitized =
            structure::sanitize_object(object, ObjectKind::Message, &JsonPath::root(), &mut errors)
                .unwrap_or_default();

        self.check_object(object, ObjectKind::Message, &JsonPath::root(), &mut errors);

        let message = match serde_json::from_value::<Message>(Value::Object(sanitized)) {
            Ok(message) => message,
            Err(err) => {
                errors.push(ValidationError::Unrepresentable(err.to_string()));
                Message::default()
            }
        };

        if let Some(error) = rules::check_embed_total(&message, &self.limits) {
            errors.push(error);
        }

        SchemaReport { message, errors }
    }

    fn check_object(
        &self,
        object: &Map<String, Value>,
        kind: ObjectKind,
        path: &JsonPath,
        errors: &mut Vec<ValidationError>,
    ) {
        for (key, value) in object {
            let Some(property) = kind.property(key) else {
                continue;
            };
            if !structure::is_kept(value, property.kind) {
                continue;
            }
            let child = path.key(key);
            errors.extend(
                property
                    .constraints
                    .iter()
                    .filter_map(|constraint| constraint.check(value, &child, &self.limits)),
            );
            match (property.kind, value) {
                (ValueKind::Object(nested), Value::Object(inner)) => {
                    self.check_object(inner, nested, &child, errors);
                }
                (ValueKind::List(nested), Value::Array(items)) => {
                    let kept = items
                        .iter()
                        .enumerate()
                        .filter(|(_, item)| structure::is_kept(item, ValueKind::Object(nested)));
                    for (index, item) in kept {
                        if let Value::Object(inner) = item {
                            self.check_object(inner, nested, &child.index(index), errors);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

// Ordering and end-to-end behaviour are covered through `parse_message` in
// src/message/tests/json_tests.rs.
