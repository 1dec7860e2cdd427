//! Adapters from teloxide types to core types.

use crate::core::{
    Chat, Message, MessageKind, PhotoAttachment, ToCoreMessage, ToCoreUser, User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        let photos = self.photo_sizes();
        let (kind, content) = if !photos.is_empty() {
            (MessageKind::Photo, msg.caption().unwrap_or(""))
        } else if let Some(text) = msg.text() {
            (MessageKind::Text, text)
        } else {
            (MessageKind::Other, "")
        };

        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: msg.chat.id.0,
                    username: msg.chat.username().map(str::to_string),
                    first_name: msg.chat.first_name().map(str::to_string),
                    last_name: msg.chat.last_name().map(str::to_string),
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type(&msg.chat).to_string(),
            },
            kind,
            content: content.to_string(),
            photos,
            created_at: msg.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// All offered sizes of the attached photo, in Telegram's order (smallest first).
    fn photo_sizes(&self) -> Vec<PhotoAttachment> {
        self.0
            .photo()
            .unwrap_or_default()
            .iter()
            .map(|p| PhotoAttachment {
                file_id: p.file.id.0.clone(),
                width: p.width,
                height: p.height,
                file_size: p.file.size,
            })
            .collect()
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}
