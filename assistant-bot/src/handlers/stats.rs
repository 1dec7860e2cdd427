//! `/stats`: cumulative growth chart, administrator only. The image always goes to the
//! administrator's private chat, whichever chat the command came from.

use crate::config::BotConfig;
use crate::core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use crate::texts;
use async_trait::async_trait;
use registry::RegistryStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct StatsHandler {
    bot: Arc<dyn Bot>,
    store: Arc<RegistryStore>,
    config: Arc<BotConfig>,
}

impl StatsHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<RegistryStore>, config: Arc<BotConfig>) -> Self {
        Self { bot, store, config }
    }
}

#[async_trait]
impl Handler for StatsHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.config.is_admin(message.user.id) {
            warn!(user_id = message.user.id, "Non-admin tried /stats");
            self.bot
                .reply_to(message, texts::PERMISSION_DENIED)
                .await?;
            return Ok(HandlerResponse::Reply(texts::PERMISSION_DENIED.to_string()));
        }

        let registry = self.store.load().await?;
        if registry.is_empty() {
            self.bot.reply_to(message, texts::NO_STATS).await?;
            return Ok(HandlerResponse::Reply(texts::NO_STATS.to_string()));
        }

        let series = registry.growth_series();
        let path = &self.config.stats_image_path;
        growth_chart::render_to_file(&series, path)?;
        info!(
            points = series.len(),
            total_users = registry.len(),
            path = %path.display(),
            "Growth chart rendered"
        );

        let caption = texts::chart_caption(&series);
        self.bot
            .send_photo(&Chat::private(self.config.admin_id), path, Some(&caption))
            .await?;
        Ok(HandlerResponse::Stop)
    }
}
