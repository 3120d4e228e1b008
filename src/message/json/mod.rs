//! Conversion between [`Message`](crate::message::domain::Message) values and
//! their canonical JSON text.
//!
//! `stringify_message` and `parse_message` are inverses for schema-valid
//! messages: parsing the canonical text of a valid message yields an equal
//! message and no errors.

mod parse;
mod stringify;

pub use parse::{ParseReport, parse_message, parse_message_with};
pub use stringify::stringify_message;
