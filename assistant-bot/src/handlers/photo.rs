//! Photos: the largest offered size is resolved to a URL and described by the vision model.

use crate::core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use crate::texts;
use async_trait::async_trait;
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct PhotoHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
}

impl PhotoHandler {
    pub fn new(bot: Arc<dyn Bot>, llm: Arc<dyn LlmClient>) -> Self {
        Self { bot, llm }
    }
}

#[async_trait]
impl Handler for PhotoHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(photo) = message.largest_photo() else {
            warn!(message_id = %message.id, "Photo message without sizes");
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            file_id = %photo.file_id,
            width = photo.width,
            height = photo.height,
            "Resolving photo"
        );
        let url = self.bot.file_url(&photo.file_id).await?;

        let messages = vec![
            ChatMessage::system(texts::VISION_SYSTEM_PROMPT),
            ChatMessage::user_with_image(texts::PHOTO_INSTRUCTION, url),
        ];

        let answer = self
            .llm
            .get_llm_response_with_messages(messages)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = message.user.id, "Vision request failed");
                BotError::Llm(e.to_string())
            })?;

        info!(answer_len = answer.len(), "Vision model answered");
        self.bot.reply_to(message, &answer).await?;
        Ok(HandlerResponse::Reply(answer))
    }
}
