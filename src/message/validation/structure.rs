//! Structural pass: JSON types, required keys, and unknown keys.
//!
//! Walks the input object in key order against the schema tables. Every
//! problem is recorded, and a sanitised copy is built that keeps only the
//! values of the right shape so a best-effort message can still be
//! deserialized from it.

use serde_json::{Map, Value};

use super::schema::{JsonPath, ObjectKind, ValueKind, describe_value};
use crate::message::error::ValidationError;

/// Sanitises `object` as `kind`, appending structural errors to `errors`.
///
/// Returns `None` when a required property is missing or unusable; the
/// caller then drops the whole object. `null` values count as absent.
pub(crate) fn sanitize_object(
    object: &Map<String, Value>,
    kind: ObjectKind,
    path: &JsonPath,
    errors: &mut Vec<ValidationError>,
) -> Option<Map<String, Value>> {
    let mut clean = Map::new();

    for (key, value) in object {
        let child = path.key(key);
        let Some(property) = kind.property(key) else {
            errors.push(ValidationError::UnknownProperty {
                path: child.to_string(),
            });
            continue;
        };
        if value.is_null() {
            continue;
        }
        if let Some(sanitized) = sanitize_value(value, property.kind, &child, errors) {
            clean.insert(key.clone(), sanitized);
        }
    }

    let mut complete = true;
    for property in kind.properties().iter().filter(|property| property.required) {
        if clean.contains_key(property.name) {
            continue;
        }
        complete = false;
        let absent = object.get(property.name).is_none_or(Value::is_null);
        if absent {
            errors.push(ValidationError::MissingProperty {
                path: path.key(property.name).to_string(),
            });
        }
    }

    complete.then_some(clean)
}

/// Returns `true` when the structural pass keeps `value` as a `kind`.
pub(crate) fn is_kept(value: &Value, kind: ValueKind) -> bool {
    sanitize_value(value, kind, &JsonPath::root(), &mut Vec::new()).is_some()
}

fn sanitize_value(
    value: &Value,
    kind: ValueKind,
    path: &JsonPath,
    errors: &mut Vec<ValidationError>,
) -> Option<Value> {
    let sanitized = match (kind, value) {
        (ValueKind::Text, Value::String(_)) | (ValueKind::Boolean, Value::Bool(_)) => {
            Some(value.clone())
        }
        (ValueKind::Integer, Value::Number(number)) if number.is_i64() => Some(value.clone()),
        (ValueKind::Object(object_kind), Value::Object(object)) => {
            return sanitize_object(object, object_kind, path, errors).map(Value::Object);
        }
        (ValueKind::List(item_kind), Value::Array(items)) => {
            return Some(Value::Array(sanitize_items(items, item_kind, path, errors)));
        }
        _ => None,
    };

    if sanitized.is_none() {
        errors.push(mismatch(path, kind.describe(), value));
    }
    sanitized
}

fn sanitize_items(
    items: &[Value],
    kind: ObjectKind,
    path: &JsonPath,
    errors: &mut Vec<ValidationError>,
) -> Vec<Value> {
    let mut clean = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let child = path.index(index);
        if let Value::Object(object) = item {
            if let Some(sanitized) = sanitize_object(object, kind, &child, errors) {
                clean.push(Value::Object(sanitized));
            }
        } else {
            errors.push(mismatch(&child, "an object", item));
        }
    }
    clean
}

fn mismatch(path: &JsonPath, expected: &'static str, found: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: describe_value(found),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn sanitize(value: &Value) -> (Option<Map<String, Value>>, Vec<ValidationError>) {
        let mut errors = Vec::new();
        let object = value.as_object().expect("fixture must be an object");
        let clean = sanitize_object(object, ObjectKind::Message, &JsonPath::root(), &mut errors);
        (clean, errors)
    }

    #[rstest]
    fn well_typed_message_is_kept_verbatim() {
        let input = json!({
            "content": "hi",
            "embeds": [{ "title": "t", "fields": [{ "name": "a", "value": "b", "inline": true }] }],
        });
        let (clean, errors) = sanitize(&input);
        assert!(errors.is_empty());
        assert_eq!(clean.map(Value::Object), Some(input));
    }

    #[rstest]
    fn wrong_types_are_reported_and_dropped() {
        let (clean, errors) = sanitize(&json!({ "content": 5, "username": "bot" }));
        assert_eq!(
            errors,
            vec![ValidationError::TypeMismatch {
                path: "content".to_owned(),
                expected: "a string",
                found: "a number",
            }]
        );
        assert_eq!(
            clean.map(Value::Object),
            Some(json!({ "username": "bot" }))
        );
    }

    #[rstest]
    fn fractional_color_is_not_an_integer() {
        let (_, errors) = sanitize(&json!({ "embeds": [{ "color": 1.5 }] }));
        assert_eq!(
            errors.first().map(ToString::to_string).as_deref(),
            Some("embeds[0].color must be an integer, found a number")
        );
    }

    #[rstest]
    fn field_missing_value_is_dropped_with_error() {
        let (clean, errors) = sanitize(&json!({
            "embeds": [{ "fields": [{ "name": "a" }, { "name": "b", "value": "c" }] }],
        }));
        assert_eq!(
            errors,
            vec![ValidationError::MissingProperty {
                path: "embeds[0].fields[0].value".to_owned(),
            }]
        );
        assert_eq!(
            clean.map(Value::Object),
            Some(json!({ "embeds": [{ "fields": [{ "name": "b", "value": "c" }] }] }))
        );
    }

    #[rstest]
    fn wrong_typed_required_key_is_not_also_missing() {
        let (_, errors) = sanitize(&json!({ "embeds": [{ "footer": { "text": 3 } }] }));
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.first(),
            Some(ValidationError::TypeMismatch { path, .. }) if path == "embeds[0].footer.text"
        ));
    }

    #[rstest]
    fn unknown_keys_and_non_object_items_are_reported_in_order() {
        let (_, errors) = sanitize(&json!({ "tts": true, "embeds": ["x"] }));
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "tts is not a known property".to_owned(),
                "embeds[0] must be an object, found a string".to_owned(),
            ]
        );
    }

    #[rstest]
    #[case::complete(json!({ "name": "n", "value": "v" }), true)]
    #[case::missing_value(json!({ "name": "n" }), false)]
    #[case::not_an_object(json!("n"), false)]
    #[case::null(Value::Null, false)]
    fn is_kept_matches_sanitize(#[case] field: Value, #[case] kept: bool) {
        assert_eq!(is_kept(&field, ValueKind::Object(ObjectKind::Field)), kept);
    }

    #[rstest]
    fn null_values_count_as_absent() {
        let (clean, errors) = sanitize(&json!({ "content": null }));
        assert!(errors.is_empty());
        assert_eq!(clean.map(Value::Object), Some(json!({})));
    }
}
