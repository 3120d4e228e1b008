//! Named schema constraints.
//!
//! Each constraint is checked by a pure function that looks its ceiling up
//! in [`SchemaLimits`] and returns `None` on success or the specific
//! [`ValidationError`] on failure. Constraints only look at values of the
//! type they expect; type errors belong to the structural pass.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;
use url::Url;

use super::schema::JsonPath;
use crate::message::{
    domain::{Embed, Message},
    error::ValidationError,
    ports::validator::SchemaLimits,
};

/// Text values with a length ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLimit {
    /// Message body.
    Content,
    /// Username override.
    Username,
    /// Embed title.
    Title,
    /// Embed description.
    Description,
    /// Field name.
    FieldName,
    /// Field value.
    FieldValue,
    /// Footer text.
    FooterText,
    /// Author name.
    AuthorName,
}

impl TextLimit {
    /// Returns the configured ceiling.
    #[must_use]
    pub const fn ceiling(self, limits: &SchemaLimits) -> usize {
        match self {
            Self::Content => limits.max_content_length,
            Self::Username => limits.max_username_length,
            Self::Title => limits.max_title_length,
            Self::Description => limits.max_description_length,
            Self::FieldName => limits.max_field_name_length,
            Self::FieldValue => limits.max_field_value_length,
            Self::FooterText => limits.max_footer_text_length,
            Self::AuthorName => limits.max_author_name_length,
        }
    }
}

/// Lists with an item ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLimit {
    /// Embeds per message.
    Embeds,
    /// Fields per embed.
    Fields,
}

impl ListLimit {
    /// Returns the configured ceiling.
    #[must_use]
    pub const fn ceiling(self, limits: &SchemaLimits) -> usize {
        match self {
            Self::Embeds => limits.max_embeds,
            Self::Fields => limits.max_fields,
        }
    }
}

/// A named constraint attached to a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Character count ceiling on a string.
    MaxLength(TextLimit),
    /// Item count ceiling on an array.
    MaxItems(ListLimit),
    /// Embed colour range.
    ColorRange,
    /// ISO 8601 timestamp format.
    Timestamp,
    /// Absolute http, https, or attachment URL.
    Link,
}

impl Constraint {
    /// Checks `value` at `path` against this constraint.
    ///
    /// Returns `None` when the value satisfies the constraint or is not of
    /// the type the constraint applies to.
    #[must_use]
    pub fn check(
        self,
        value: &Value,
        path: &JsonPath,
        limits: &SchemaLimits,
    ) -> Option<ValidationError> {
        match self {
            Self::MaxLength(limit) => value
                .as_str()
                .and_then(|text| check_length(text, limit.ceiling(limits), path)),
            Self::MaxItems(limit) => value
                .as_array()
                .and_then(|items| check_items(items.len(), limit.ceiling(limits), path)),
            Self::ColorRange => value
                .as_i64()
                .and_then(|color| check_color(color, limits, path)),
            Self::Timestamp => value.as_str().and_then(|text| check_timestamp(text, path)),
            Self::Link => value
                .as_str()
                .filter(|_| limits.require_http_urls)
                .and_then(|text| check_link(text, path)),
        }
    }
}

fn check_length(text: &str, limit: usize, path: &JsonPath) -> Option<ValidationError> {
    let actual = text.chars().count();
    (actual > limit).then(|| ValidationError::TooLong {
        path: path.to_string(),
        limit,
        actual,
    })
}

fn check_items(actual: usize, limit: usize, path: &JsonPath) -> Option<ValidationError> {
    (actual > limit).then(|| ValidationError::TooMany {
        path: path.to_string(),
        limit,
        actual,
    })
}

fn check_color(color: i64, limits: &SchemaLimits, path: &JsonPath) -> Option<ValidationError> {
    let in_range = (limits.min_color..=limits.max_color).contains(&color);
    (!in_range).then(|| ValidationError::OutOfRange {
        path: path.to_string(),
        min: limits.min_color,
        max: limits.max_color,
        actual: color,
    })
}

/// Accepts RFC 3339 and ISO 8601 local date-times without an offset.
fn check_timestamp(text: &str, path: &JsonPath) -> Option<ValidationError> {
    let valid = DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok();
    (!valid).then(|| ValidationError::InvalidTimestamp {
        path: path.to_string(),
    })
}

fn check_link(text: &str, path: &JsonPath) -> Option<ValidationError> {
    let accepted = Url::parse(text)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https" | "attachment"));
    (!accepted).then(|| ValidationError::InvalidUrl {
        path: path.to_string(),
    })
}

/// Checks the combined character count of all embeds.
///
/// Counts titles, descriptions, field names and values, footer text, and
/// author names.
#[must_use]
pub fn check_embed_total(message: &Message, limits: &SchemaLimits) -> Option<ValidationError> {
    let actual: usize = message.embeds().iter().map(embed_characters).sum();
    (actual > limits.max_embed_characters).then_some(ValidationError::EmbedsTooLarge {
        limit: limits.max_embed_characters,
        actual,
    })
}

fn embed_characters(embed: &Embed) -> usize {
    let count = |text: Option<&str>| text.map_or(0, |value| value.chars().count());
    let fields: usize = embed
        .fields()
        .iter()
        .map(|field| field.name.chars().count() + field.value.chars().count())
        .sum();
    count(embed.title.as_deref())
        + count(embed.description.as_deref())
        + count(embed.footer.as_ref().map(|footer| footer.text.as_str()))
        + count(embed.author.as_ref().map(|author| author.name.as_str()))
        + fields
}
