//! # Telegram assistant bot
//!
//! Answers text and photos through an OpenAI-compatible model, keeps a JSON registry of users
//! and gives the administrator a user listing and a growth chart.
//!
//! Layout: [`core`] (Bot, Handler, Message), [`chain`] (HandlerChain), [`dispatch`] (routing),
//! [`handlers`], [`telegram`] (teloxide side), [`components`] and [`runner`] (assembly).

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod handlers;
pub mod runner;
pub mod telegram;
pub mod texts;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message, MessageKind,
    PhotoAttachment, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use dispatch::{Command, DispatchTable, Route};

pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use config::BotConfig;
pub use runner::run_bot;

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use handlers::{
    AdminHandler, LoggingHandler, PhotoHandler, StartHandler, StatsHandler, TextHandler,
};
