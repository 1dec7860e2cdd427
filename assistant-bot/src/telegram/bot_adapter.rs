//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{Bot as CoreBot, BotError, Chat, Result};
use async_trait::async_trait;
use std::path::Path;
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, InputFile, ParseMode},
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, path: &Path, caption: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::file(path.to_path_buf()));
        if let Some(caption) = caption {
            request = request.caption(caption.to_string());
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Download URL of a file; it embeds the bot token and must not be logged.
    async fn file_url(&self, file_id: &str) -> Result<String> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        debug!(file_id, size = file.meta.size, "Resolved file path");
        Ok(format!(
            "{}/file/bot{}/{}",
            self.bot.api_url().as_str().trim_end_matches('/'),
            self.bot.token(),
            file.path
        ))
    }
}
