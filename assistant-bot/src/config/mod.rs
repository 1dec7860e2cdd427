//! Bot configuration, loaded once from the environment at startup and shared read-only.

mod bot_config;


pub use bot_config::{
    BotConfig, DEFAULT_LOG_FILE, DEFAULT_OPENAI_BASE_URL, DEFAULT_STATS_IMAGE_PATH,
    DEFAULT_USERS_FILE,
};
