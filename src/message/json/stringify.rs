//! Canonical JSON text for a message.

use tracing::error;

use crate::message::domain::Message;

/// Serializes a message to its canonical JSON text.
///
/// Output is pretty-printed with two-space indentation, keys follow the
/// declared field order, and absent optionals are omitted, so re-serializing
/// an unchanged message always yields identical text. The empty message is
/// `{}`.
///
/// # Examples
///
/// ```
/// use hookcraft::message::{domain::Message, json::stringify_message};
///
/// let text = stringify_message(&Message::default().with_content("hi"));
/// assert_eq!(text, "{\n  \"content\": \"hi\"\n}");
/// ```
#[must_use]
pub fn stringify_message(message: &Message) -> String {
    // Only string-keyed structs and plain values reach the serializer, so
    // this cannot fail in practice.
    serde_json::to_string_pretty(message).unwrap_or_else(|err| {
        error!(%err, "message serialization failed");
        String::from("{}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::domain::{Embed, EmbedFooter};

    #[test]
    fn empty_message_is_empty_object() {
        assert_eq!(stringify_message(&Message::default()), "{}");
    }

    #[test]
    fn keys_follow_declared_order() {
        let message = Message::default()
            .with_avatar_url("https://example.com/a.png")
            .with_username("bot")
            .with_content("hi");
        let text = stringify_message(&message);
        let content = text.find("\"content\"").expect("content key");
        let username = text.find("\"username\"").expect("username key");
        let avatar = text.find("\"avatar_url\"").expect("avatar key");
        assert!(content < username && username < avatar);
    }

    #[test]
    fn nested_embeds_are_indented() {
        let message = Message::default()
            .with_embed(Embed::default().with_footer(EmbedFooter::new("f")));
        let expected = "{\n  \"embeds\": [\n    {\n      \"footer\": {\n        \"text\": \"f\"\n      }\n    }\n  ]\n}";
        assert_eq!(stringify_message(&message), expected);
    }
}
