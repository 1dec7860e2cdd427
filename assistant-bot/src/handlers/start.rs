//! `/start`: registers the sender once, tells the administrator about new users, greets.

use crate::config::BotConfig;
use crate::core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use crate::texts;
use async_trait::async_trait;
use registry::RegistryStore;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    store: Arc<RegistryStore>,
    config: Arc<BotConfig>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<RegistryStore>, config: Arc<BotConfig>) -> Self {
        Self { bot, store, config }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let name = message.user.display_name();
        let joined_at = chrono::Local::now().naive_local();

        let registration = self
            .store
            .register_if_absent(message.user.id, &name, joined_at)
            .await?;

        if registration.is_new() {
            info!(
                user_id = message.user.id,
                admin_id = self.config.admin_id,
                "Notifying administrator about new user"
            );
            self.bot
                .send_message(
                    &Chat::private(self.config.admin_id),
                    &texts::new_user_notice(&name, message.user.id),
                )
                .await?;
        }

        let welcome = texts::welcome(&name);
        self.bot.reply_to(message, &welcome).await?;
        Ok(HandlerResponse::Reply(welcome))
    }
}
