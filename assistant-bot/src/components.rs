//! Component factory: builds the teloxide bot, LLM client, registry store and handler chain
//! from config. Isolates assembly from the runner so tests can inject their own Bot and LLM.

use llm_client::{LlmClient, OpenAILlmClient};
use registry::RegistryStore;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::dispatch::{Command, DispatchTable, Route};
use crate::handlers::{
    AdminHandler, LoggingHandler, PhotoHandler, StartHandler, StatsHandler, TextHandler,
};
use crate::telegram::TelegramBotAdapter;

/// Dependencies shared by all handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub config: Arc<BotConfig>,
    pub teloxide_bot: Bot,
    pub bot: Arc<dyn CoreBot>,
    pub llm: Arc<dyn LlmClient>,
    pub store: Arc<RegistryStore>,
}

/// teloxide Bot with the configured API URL, if any.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

pub fn build_llm_client(config: &BotConfig) -> Arc<dyn LlmClient> {
    Arc::new(
        OpenAILlmClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.model.clone()),
    )
}

#[instrument(skip(config))]
pub fn build_bot_components(config: BotConfig) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(&config);
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let llm = build_llm_client(&config);
    let store = Arc::new(RegistryStore::new(config.users_file.clone()));

    info!(
        model = %config.model,
        users_file = %config.users_file.display(),
        admin_id = config.admin_id,
        "Bot components built"
    );

    BotComponents {
        config: Arc::new(config),
        teloxide_bot,
        bot,
        llm,
        store,
    }
}

/// Chain: `LoggingHandler → DispatchTable` with every command, text and photo route.
/// `bot_username` lets `/cmd@bot_username` through.
pub fn build_handler_chain(
    config: Arc<BotConfig>,
    bot: Arc<dyn CoreBot>,
    llm: Arc<dyn LlmClient>,
    store: Arc<RegistryStore>,
    bot_username: &str,
) -> HandlerChain {
    let dispatch = DispatchTable::new(bot_username)
        .route(
            Route::Command(Command::Start),
            Arc::new(StartHandler::new(bot.clone(), store.clone(), config.clone())),
        )
        .route(
            Route::Command(Command::Admin),
            Arc::new(AdminHandler::new(bot.clone(), store.clone(), config.clone())),
        )
        .route(
            Route::Command(Command::Stats),
            Arc::new(StatsHandler::new(bot.clone(), store, config)),
        )
        .route(Route::Text, Arc::new(TextHandler::new(bot.clone(), llm.clone())))
        .route(Route::Photo, Arc::new(PhotoHandler::new(bot, llm)));

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(dispatch))
}

impl BotComponents {
    pub fn handler_chain(&self, bot_username: &str) -> HandlerChain {
        build_handler_chain(
            self.config.clone(),
            self.bot.clone(),
            self.llm.clone(),
            self.store.clone(),
            bot_username,
        )
    }
}
