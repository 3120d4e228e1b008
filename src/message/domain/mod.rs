//! Domain types for the message subsystem.
//!
//! This module contains pure data types with no infrastructure dependencies
//! beyond serde. Everything here is a plain value compared structurally.

mod attachment;
mod embed;
mod message;

pub use attachment::{Attachment, AttachmentError};
pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
pub use message::Message;
