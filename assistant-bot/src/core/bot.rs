//! Bot abstraction for outbound messages.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via
//! teloxide and tests substitute a recording mock.

use async_trait::async_trait;
use std::path::Path;

use super::error::Result;
use super::types::{Chat, Message};

/// Outbound side of the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a message rendered with Telegram's HTML parse mode.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;

    /// Replies to the given message (same chat), plain text.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Uploads a local image file as a photo, with optional caption.
    async fn send_photo(&self, chat: &Chat, path: &Path, caption: Option<&str>) -> Result<()>;

    /// Resolves a transport file id into a URL the file can be downloaded from.
    async fn file_url(&self, file_id: &str) -> Result<String>;
}
