//! Declarative description of the message JSON schema.
//!
//! Each object kind lists its properties in canonical order together with
//! the JSON type they must have, whether they are required, and the named
//! constraints that apply to them. Both validation passes walk these tables;
//! neither hard-codes a field.

use std::fmt;

use serde_json::Value;

use super::rules::{Constraint, ListLimit, TextLimit};

/// The kinds of JSON object that appear in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// The top-level message.
    Message,
    /// An entry of `embeds`.
    Embed,
    /// `embeds[].author`.
    Author,
    /// `embeds[].footer`.
    Footer,
    /// `embeds[].image` and `embeds[].thumbnail`.
    Media,
    /// An entry of `embeds[].fields`.
    Field,
}

/// The JSON type a property must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A string.
    Text,
    /// A whole number representable as `i64`.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A nested object.
    Object(ObjectKind),
    /// An array of nested objects.
    List(ObjectKind),
}

impl ValueKind {
    /// Describes the expected type for error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::Object(_) => "an object",
            Self::List(_) => "an array",
        }
    }
}

/// One property of an object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// JSON key.
    pub name: &'static str,
    /// Required JSON type.
    pub kind: ValueKind,
    /// Whether the property must be present.
    pub required: bool,
    /// Named constraints checked once the type is correct.
    pub constraints: &'static [Constraint],
}

impl Property {
    const fn optional(
        name: &'static str,
        kind: ValueKind,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            kind,
            required: false,
            constraints,
        }
    }

    const fn required(
        name: &'static str,
        kind: ValueKind,
        constraints: &'static [Constraint],
    ) -> Self {
        Self {
            name,
            kind,
            required: true,
            constraints,
        }
    }
}

const MESSAGE_PROPERTIES: &[Property] = &[
    Property::optional(
        "content",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::Content)],
    ),
    Property::optional(
        "embeds",
        ValueKind::List(ObjectKind::Embed),
        &[Constraint::MaxItems(ListLimit::Embeds)],
    ),
    Property::optional(
        "username",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::Username)],
    ),
    Property::optional("avatar_url", ValueKind::Text, &[Constraint::Link]),
];

const EMBED_PROPERTIES: &[Property] = &[
    Property::optional(
        "title",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::Title)],
    ),
    Property::optional(
        "description",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::Description)],
    ),
    Property::optional("url", ValueKind::Text, &[Constraint::Link]),
    Property::optional("color", ValueKind::Integer, &[Constraint::ColorRange]),
    Property::optional("timestamp", ValueKind::Text, &[Constraint::Timestamp]),
    Property::optional("author", ValueKind::Object(ObjectKind::Author), &[]),
    Property::optional("footer", ValueKind::Object(ObjectKind::Footer), &[]),
    Property::optional("image", ValueKind::Object(ObjectKind::Media), &[]),
    Property::optional("thumbnail", ValueKind::Object(ObjectKind::Media), &[]),
    Property::optional(
        "fields",
        ValueKind::List(ObjectKind::Field),
        &[Constraint::MaxItems(ListLimit::Fields)],
    ),
];

const AUTHOR_PROPERTIES: &[Property] = &[
    Property::required(
        "name",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::AuthorName)],
    ),
    Property::optional("url", ValueKind::Text, &[Constraint::Link]),
    Property::optional("icon_url", ValueKind::Text, &[Constraint::Link]),
];

const FOOTER_PROPERTIES: &[Property] = &[
    Property::required(
        "text",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::FooterText)],
    ),
    Property::optional("icon_url", ValueKind::Text, &[Constraint::Link]),
];

const MEDIA_PROPERTIES: &[Property] = &[Property::required(
    "url",
    ValueKind::Text,
    &[Constraint::Link],
)];

const FIELD_PROPERTIES: &[Property] = &[
    Property::required(
        "name",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::FieldName)],
    ),
    Property::required(
        "value",
        ValueKind::Text,
        &[Constraint::MaxLength(TextLimit::FieldValue)],
    ),
    Property::optional("inline", ValueKind::Boolean, &[]),
];

impl ObjectKind {
    /// Returns the properties of this kind in canonical order.
    #[must_use]
    pub const fn properties(self) -> &'static [Property] {
        match self {
            Self::Message => MESSAGE_PROPERTIES,
            Self::Embed => EMBED_PROPERTIES,
            Self::Author => AUTHOR_PROPERTIES,
            Self::Footer => FOOTER_PROPERTIES,
            Self::Media => MEDIA_PROPERTIES,
            Self::Field => FIELD_PROPERTIES,
        }
    }

    /// Looks up a property by JSON key.
    #[must_use]
    pub fn property(self, name: &str) -> Option<&'static Property> {
        self.properties()
            .iter()
            .find(|property| property.name == name)
    }
}

/// Location of a value inside the message JSON, rendered as
/// `embeds[0].fields[1].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(String);

impl JsonPath {
    /// The path of the top-level object.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Extends the path with an object key.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_owned())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Extends the path with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Describes the JSON type of a value for error messages.
#[must_use]
pub const fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
