//! Schema limits applied when validating message JSON.
//!
//! The limits are configuration, not logic: the constraint pass looks every
//! ceiling up here by name.

/// Configuration for schema constraint checks.
///
/// Defaults follow the webhook platform's published message limits.
///
/// # Examples
///
/// ```
/// use hookcraft::message::ports::validator::SchemaLimits;
///
/// let limits = SchemaLimits::default();
/// assert_eq!(limits.max_content_length, 2000);
///
/// let lenient = SchemaLimits::lenient();
/// assert_eq!(lenient.max_embeds, usize::MAX);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLimits {
    /// Maximum characters in the message body.
    pub max_content_length: usize,
    /// Maximum characters in the username override.
    pub max_username_length: usize,
    /// Maximum number of embeds per message.
    pub max_embeds: usize,
    /// Maximum characters in an embed title.
    pub max_title_length: usize,
    /// Maximum characters in an embed description.
    pub max_description_length: usize,
    /// Maximum number of fields per embed.
    pub max_fields: usize,
    /// Maximum characters in a field name.
    pub max_field_name_length: usize,
    /// Maximum characters in a field value.
    pub max_field_value_length: usize,
    /// Maximum characters in footer text.
    pub max_footer_text_length: usize,
    /// Maximum characters in an author name.
    pub max_author_name_length: usize,
    /// Maximum characters across all embeds of a message.
    pub max_embed_characters: usize,
    /// Smallest accepted embed colour.
    pub min_color: i64,
    /// Largest accepted embed colour.
    pub max_color: i64,
    /// Whether links must be absolute http or https URLs.
    pub require_http_urls: bool,
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            max_content_length: 2000,
            max_username_length: 80,
            max_embeds: 10,
            max_title_length: 256,
            max_description_length: 4096,
            max_fields: 25,
            max_field_name_length: 256,
            max_field_value_length: 1024,
            max_footer_text_length: 2048,
            max_author_name_length: 256,
            max_embed_characters: 6000,
            min_color: 0,
            max_color: 0x00FF_FFFF,
            require_http_urls: true,
        }
    }
}

impl SchemaLimits {
    /// Creates a configuration with every ceiling lifted.
    ///
    /// Only the colour range and the timestamp format are still enforced.
    /// Useful for drafting messages for a receiver with unknown limits.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_content_length: usize::MAX,
            max_username_length: usize::MAX,
            max_embeds: usize::MAX,
            max_title_length: usize::MAX,
            max_description_length: usize::MAX,
            max_fields: usize::MAX,
            max_field_name_length: usize::MAX,
            max_field_value_length: usize::MAX,
            max_footer_text_length: usize::MAX,
            max_author_name_length: usize::MAX,
            max_embed_characters: usize::MAX,
            require_http_urls: false,
            ..Self::default()
        }
    }
}
