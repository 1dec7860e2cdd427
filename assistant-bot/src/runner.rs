use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument, warn};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::dispatch::Command;
use crate::telegram::run_repl;
use llm_client::mask_token;

/// Main entry: validate config, init logging, build components, register the command list,
/// then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.open_log_file()?)?;

    if let Err(e) = growth_chart::register_font(config.chart_font.as_deref()) {
        warn!(error = %e, "No chart font available, /stats will fail");
    }

    info!(
        bot_token = %mask_token(&config.bot_token),
        openai_api_key = %mask_token(&config.openai_api_key),
        model = %config.model,
        "Initializing bot"
    );

    let components = build_bot_components(config);
    let teloxide_bot = components.teloxide_bot.clone();

    let bot_username = match teloxide_bot.get_me().await {
        Ok(me) => me.user.username.clone().unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "get_me failed, /cmd@bot mentions will not be recognised");
            String::new()
        }
    };
    info!(username = %bot_username, "Bot username resolved");

    if let Err(e) = teloxide_bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command list");
    }

    let handler_chain = components.handler_chain(&bot_username);

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}
