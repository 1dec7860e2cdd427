//! Free text: one stateless completion, answer relayed verbatim.

use crate::core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use crate::texts;
use async_trait::async_trait;
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{error, info, instrument};

pub struct TextHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
}

impl TextHandler {
    pub fn new(bot: Arc<dyn Bot>, llm: Arc<dyn LlmClient>) -> Self {
        Self { bot, llm }
    }
}

#[async_trait]
impl Handler for TextHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let messages = vec![
            ChatMessage::system(texts::TEXT_SYSTEM_PROMPT),
            ChatMessage::user(message.content.clone()),
        ];

        let answer = self
            .llm
            .get_llm_response_with_messages(messages)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = message.user.id, "LLM request failed");
                BotError::Llm(e.to_string())
            })?;

        info!(answer_len = answer.len(), "LLM answered");
        self.bot.reply_to(message, &answer).await?;
        Ok(HandlerResponse::Reply(answer))
    }
}
