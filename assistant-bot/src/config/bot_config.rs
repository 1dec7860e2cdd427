//! BotConfig: Telegram connection, LLM settings, administrator identity and file paths.

use anyhow::{Context, Result};
use llm_client::DEFAULT_MODEL;
use std::env;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_STATS_IMAGE_PATH: &str = "stats.png";
pub const DEFAULT_LOG_FILE: &str = "logs/assistant-bot.log";

/// Immutable configuration built at startup and passed to every handler that needs it.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_TOKEN (or BOT_TOKEN)
    pub bot_token: String,
    /// OPENAI_API_KEY
    pub openai_api_key: String,
    /// OPENAI_BASE_URL
    pub openai_base_url: String,
    /// MODEL
    pub model: String,
    /// ADMIN_ID: the only user allowed to run /admin and /stats; receives new-user notices.
    pub admin_id: i64,
    /// USERS_FILE: registry JSON file
    pub users_file: PathBuf,
    /// STATS_IMAGE_PATH: chart written by /stats (overwritten each call)
    pub stats_image_path: PathBuf,
    /// LOG_FILE: appended to, alongside stdout
    pub log_file: PathBuf,
    /// CHART_FONT: TrueType font for chart labels; well-known system fonts are tried otherwise
    pub chart_font: Option<PathBuf>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{} not set", name))
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_TOKEN/BOT_TOKEN if provided.
    /// Fails when a required variable is missing or ADMIN_ID is not an integer.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => required("TELEGRAM_TOKEN")
                .or_else(|_| required("BOT_TOKEN"))
                .context("TELEGRAM_TOKEN (or BOT_TOKEN) not set")?,
        };
        let openai_api_key = required("OPENAI_API_KEY")?;
        let admin_id = Self::parse_admin_id(&required("ADMIN_ID")?)?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let users_file = env::var("USERS_FILE")
            .unwrap_or_else(|_| DEFAULT_USERS_FILE.to_string())
            .into();
        let stats_image_path = env::var("STATS_IMAGE_PATH")
            .unwrap_or_else(|_| DEFAULT_STATS_IMAGE_PATH.to_string())
            .into();
        let log_file = env::var("LOG_FILE")
            .unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
            .into();
        let chart_font = env::var("CHART_FONT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            openai_api_key,
            openai_base_url,
            model,
            admin_id,
            users_file,
            stats_image_path,
            log_file,
            chart_font,
            telegram_api_url,
        })
    }

    /// Parses the administrator's numeric Telegram id.
    pub fn parse_admin_id(raw: &str) -> Result<i64> {
        raw.trim()
            .parse()
            .with_context(|| format!("ADMIN_ID must be an integer Telegram user id, got {:?}", raw))
    }

    /// Validates URLs. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.openai_base_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.openai_base_url);
        }
        Ok(())
    }

    /// Opens LOG_FILE for appending, creating it and its parent directory when missing.
    pub fn open_log_file(&self) -> Result<File> {
        if let Some(dir) = self
            .log_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Cannot open log file {}", self.log_file.display()))
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        user_id == self.admin_id
    }
}
