//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What the update carries; decides routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Text message (commands included; they are recognised by the dispatcher).
    Text,
    /// Photo message; `content` holds the caption, if any.
    Photo,
    /// Anything else (stickers, documents, service messages...).
    Other,
}

/// One size of a photo as offered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
    pub file_size: u32,
}

impl PhotoAttachment {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A single inbound update with sender, chat, kind and payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: MessageKind,
    /// Text, or the caption of a photo.
    pub content: String,
    /// All offered sizes of the photo; empty unless `kind` is [`MessageKind::Photo`].
    pub photos: Vec<PhotoAttachment>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Highest-resolution photo size: largest pixel area, then largest file. Among equal sizes
    /// the one offered last wins, matching the transport's smallest-to-largest ordering.
    pub fn largest_photo(&self) -> Option<&PhotoAttachment> {
        self.photos
            .iter()
            .max_by_key(|p| (p.area(), p.file_size))
    }
}
