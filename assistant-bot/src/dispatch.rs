//! Static routing: command name, plain text or photo → exactly one handler.
//!
//! Text beginning with `/` is only ever a command. Unknown commands, commands addressed to
//! another bot and non-text/non-photo updates match no route and are ignored. Photo captions
//! are never parsed as commands.

use crate::core::{Handler, HandlerResponse, Message, MessageKind, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tracing::{debug, instrument};

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[command(rename_rule = "lowercase", description = "Buyruqlar:")]
pub enum Command {
    #[command(description = "botni ishga tushirish")]
    Start,
    #[command(description = "foydalanuvchilar ro‘yxati (faqat admin)")]
    Admin,
    #[command(description = "o‘sish grafigi (faqat admin)")]
    Stats,
}

/// Where an update goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Command(Command),
    Text,
    Photo,
}

impl Route {
    /// Classifies a message. `bot_username` is used to accept `/cmd@bot_username` and reject
    /// commands addressed to other bots.
    pub fn classify(message: &Message, bot_username: &str) -> Option<Route> {
        match message.kind {
            MessageKind::Photo => Some(Route::Photo),
            MessageKind::Text => {
                let text = message.content.trim_start();
                if text.starts_with('/') {
                    // Arguments after the command name are accepted and dropped.
                    let token = text.split_whitespace().next().unwrap_or(text);
                    Command::parse(&lowercase_command(token), bot_username)
                        .ok()
                        .map(Route::Command)
                } else if text.is_empty() {
                    None
                } else {
                    Some(Route::Text)
                }
            }
            MessageKind::Other => None,
        }
    }
}

/// Lowercases the command name, leaving a `@bot_username` suffix as typed.
fn lowercase_command(token: &str) -> String {
    match token.split_once('@') {
        Some((name, mention)) => format!("{}@{}", name.to_lowercase(), mention),
        None => token.to_lowercase(),
    }
}

/// Route → handler table. Acts as a single [`Handler`] in the chain.
#[derive(Clone, Default)]
pub struct DispatchTable {
    routes: HashMap<Route, Arc<dyn Handler>>,
    bot_username: String,
}

impl DispatchTable {
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            routes: HashMap::new(),
            bot_username: bot_username.into(),
        }
    }

    pub fn route(mut self, route: Route, handler: Arc<dyn Handler>) -> Self {
        self.routes.insert(route, handler);
        self
    }

    pub fn handler_for(&self, message: &Message) -> Option<(Route, &Arc<dyn Handler>)> {
        let route = Route::classify(message, &self.bot_username)?;
        self.routes.get(&route).map(|h| (route, h))
    }
}

#[async_trait]
impl Handler for DispatchTable {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match self.handler_for(message) {
            Some((route, handler)) => {
                debug!(route = ?route, "Dispatching");
                handler.handle(message).await
            }
            None => {
                debug!(kind = ?message.kind, "No route, update ignored");
                Ok(HandlerResponse::Ignore)
            }
        }
    }
}
