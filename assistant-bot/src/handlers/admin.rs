//! `/admin`: numbered listing of every registered user, administrator only.

use crate::config::BotConfig;
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::texts;
use async_trait::async_trait;
use registry::RegistryStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct AdminHandler {
    bot: Arc<dyn Bot>,
    store: Arc<RegistryStore>,
    config: Arc<BotConfig>,
}

impl AdminHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<RegistryStore>, config: Arc<BotConfig>) -> Self {
        Self { bot, store, config }
    }
}

#[async_trait]
impl Handler for AdminHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.config.is_admin(message.user.id) {
            warn!(user_id = message.user.id, "Non-admin tried /admin");
            self.bot
                .reply_to(message, texts::PERMISSION_DENIED)
                .await?;
            return Ok(HandlerResponse::Reply(texts::PERMISSION_DENIED.to_string()));
        }

        let registry = self.store.load().await?;
        if registry.is_empty() {
            self.bot.reply_to(message, texts::NO_USERS).await?;
            return Ok(HandlerResponse::Reply(texts::NO_USERS.to_string()));
        }

        let listing = texts::user_listing(
            registry
                .iter()
                .map(|(_, record)| (record.name.as_str(), record.joined_at_string())),
        );
        info!(total_users = registry.len(), "Sending user listing");
        self.bot.send_html(&message.chat, &listing).await?;
        Ok(HandlerResponse::Reply(listing))
    }
}
