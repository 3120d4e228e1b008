//! The Message aggregate: the structured entity a user composes and sends.
//!
//! A message is a plain value. Equality is structural, which is what the
//! editor relies on for "clear all" and "has anything changed" checks.

use serde::{Deserialize, Serialize};

use super::Embed;

/// A composable webhook message.
///
/// Field order here is the key order of the canonical JSON text, and absent
/// optionals are omitted from it.
///
/// # Invariants
///
/// - A message with neither `content` nor `embeds` is the canonical empty
///   message, equal to [`Message::default`]
/// - `embeds` keeps insertion order, which is the display order
///
/// # Examples
///
/// ```
/// use hookcraft::message::domain::Message;
///
/// let message = Message::default().with_content("hi");
/// assert!(!message.is_empty());
/// assert!(Message::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Plain text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Rich content blocks in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,

    /// Display name override for the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatar image override for the webhook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Message {
    /// Sets the text body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Appends an embed, creating the embed list if needed.
    #[must_use]
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets the username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar override.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Returns `true` when the message has neither content nor embeds.
    ///
    /// Display overrides do not count: `{ "username": "bot" }` is still an
    /// empty message as far as sending is concerned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none() && self.embeds.is_none()
    }

    /// Returns `true` when the message carries non-empty content or at least
    /// one embed.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        let has_content = self.content.as_deref().is_some_and(|text| !text.is_empty());
        let has_embeds = self.embeds.as_deref().is_some_and(|embeds| !embeds.is_empty());
        has_content || has_embeds
    }

    /// Returns the embeds as a slice, empty when absent.
    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        self.embeds.as_deref().unwrap_or_default()
    }
}
