//! Embed types: rich content blocks attached to a message.
//!
//! The core treats embeds as opaque structured values. Their shape is
//! checked by the schema walk in [`crate::message::validation`], not here.

use serde::{Deserialize, Serialize};

/// A rich content block within a message.
///
/// # Examples
///
/// ```
/// use hookcraft::message::domain::{Embed, EmbedField};
///
/// let embed = Embed::default()
///     .with_title("Release")
///     .with_field(EmbedField::new("Version", "1.2.0").inline());
/// assert_eq!(embed.fields().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Heading text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link applied to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Sidebar colour as a `0xRRGGBB` integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,

    /// ISO 8601 timestamp shown next to the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Author line shown above the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Footer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// Large image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,

    /// Small image in the top corner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,

    /// Name/value pairs in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<EmbedField>>,
}

impl Embed {
    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the sidebar colour.
    #[must_use]
    pub fn with_color(mut self, color: i64) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the timestamp text.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the author line.
    #[must_use]
    pub fn with_author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// Sets the footer line.
    #[must_use]
    pub fn with_footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Appends a field, creating the field list if needed.
    #[must_use]
    pub fn with_field(mut self, field: EmbedField) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    /// Returns the fields as a slice, empty when absent.
    #[must_use]
    pub fn fields(&self) -> &[EmbedField] {
        self.fields.as_deref().unwrap_or_default()
    }
}

/// Author line of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    /// Author display name.
    pub name: String,
    /// Link applied to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Small icon shown before the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl EmbedAuthor {
    /// Creates an author line with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            icon_url: None,
        }
    }
}

/// Footer line of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Small icon shown before the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl EmbedFooter {
    /// Creates a footer with only text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }
}

/// Image or thumbnail reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    /// Source of the image.
    pub url: String,
}

/// A single name/value pair inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    /// Creates a block-level field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: None,
        }
    }

    /// Marks the field as inline.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = Some(true);
        self
    }
}
