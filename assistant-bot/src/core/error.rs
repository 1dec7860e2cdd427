//! Error types for the bot core.
//!
//! [`BotError`] is what handlers return; the dispatch loop logs it and drops the update.

use thiserror::Error;

/// Top-level error for the bot (transport, registry, LLM, chart).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Registry error: {0}")]
    Registry(#[from] registry::RegistryError),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Chart error: {0}")]
    Chart(#[from] growth_chart::ChartError),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
