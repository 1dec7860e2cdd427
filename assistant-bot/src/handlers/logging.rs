//! Logs each update in before() and the outcome in after(); never stops the chain.

use crate::core::{Handler, HandlerResponse, Message, MessageKind, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        match message.kind {
            MessageKind::Photo => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %message.user.username.as_deref().unwrap_or("unknown"),
                photo_sizes = message.photos.len(),
                "Received photo"
            ),
            _ => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %message.user.username.as_deref().unwrap_or("unknown"),
                message_content = %message.content,
                "Received message"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
