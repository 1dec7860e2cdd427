//! Shared test doubles: a recording [`Bot`], a scripted [`LlmClient`] and message builders.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use assistant_bot::{
    build_handler_chain, Bot, BotConfig, BotError, Chat, HandlerChain, Message, MessageKind,
    PhotoAttachment, User,
};
use async_trait::async_trait;
use chrono::Utc;
use llm_client::{ChatMessage, LlmClient};
use registry::RegistryStore;
use tempfile::TempDir;

pub const ADMIN_ID: i64 = 1000;
pub const BOT_USERNAME: &str = "testbot";

/// One outbound call recorded by [`MockBot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Html { chat_id: i64, html: String },
    Photo {
        chat_id: i64,
        path: PathBuf,
        caption: Option<String>,
        existed: bool,
    },
}

/// Records every send; `file_url` maps a file id to a fake download URL.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub resolved_files: Mutex<Vec<String>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| match s {
                Sent::Text { chat_id: id, .. }
                | Sent::Html { chat_id: id, .. }
                | Sent::Photo { chat_id: id, .. } => *id == chat_id,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> assistant_bot::Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> assistant_bot::Result<()> {
        self.sent.lock().unwrap().push(Sent::Html {
            chat_id: chat.id,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        path: &Path,
        caption: Option<&str>,
    ) -> assistant_bot::Result<()> {
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            path: path.to_path_buf(),
            caption: caption.map(str::to_string),
            existed: path.exists(),
        });
        Ok(())
    }

    async fn file_url(&self, file_id: &str) -> assistant_bot::Result<String> {
        self.resolved_files.lock().unwrap().push(file_id.to_string());
        Ok(format!("https://files.test/{}.jpg", file_id))
    }
}

/// Returns a fixed answer (or fails) and records every request.
pub struct MockLlm {
    answer: Option<String>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn answering(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Some(answer.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(messages);
        match &self.answer {
            Some(a) => Ok(a.clone()),
            None => anyhow::bail!("upstream unavailable"),
        }
    }
}

/// Config whose files live in `dir`.
pub fn test_config(dir: &TempDir) -> BotConfig {
    BotConfig {
        bot_token: "123:test-token".to_string(),
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "https://api.openai.com/v1".to_string(),
        model: "gpt-4o-mini".to_string(),
        admin_id: ADMIN_ID,
        users_file: dir.path().join("users.json"),
        stats_image_path: dir.path().join("stats.png"),
        log_file: dir.path().join("bot.log"),
        chart_font: None,
        telegram_api_url: None,
    }
}

pub struct TestBot {
    pub dir: TempDir,
    pub config: Arc<BotConfig>,
    pub bot: Arc<MockBot>,
    pub llm: Arc<MockLlm>,
    pub store: Arc<RegistryStore>,
    pub chain: HandlerChain,
}

impl TestBot {
    pub fn new(llm: Arc<MockLlm>) -> Self {
        let dir = TempDir::new().unwrap();
        let config = Arc::new(test_config(&dir));
        let bot = MockBot::new();
        let store = Arc::new(RegistryStore::new(config.users_file.clone()));
        let chain = build_handler_chain(
            config.clone(),
            bot.clone(),
            llm.clone(),
            store.clone(),
            BOT_USERNAME,
        );
        Self {
            dir,
            config,
            bot,
            llm,
            store,
            chain,
        }
    }
}

pub fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

/// Text message in the sender's private chat.
pub fn text_from(user: User, content: &str) -> Message {
    let chat = Chat::private(user.id);
    text_in(user, chat, content)
}

pub fn text_in(user: User, chat: Chat, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user,
        chat,
        kind: MessageKind::Text,
        content: content.to_string(),
        photos: Vec::new(),
        created_at: Utc::now(),
    }
}

pub fn photo_from(user: User, sizes: &[(&str, u32, u32, u32)]) -> Message {
    let chat = Chat::private(user.id);
    Message {
        id: "2".to_string(),
        user,
        chat,
        kind: MessageKind::Photo,
        content: String::new(),
        photos: sizes
            .iter()
            .map(|&(id, width, height, file_size)| PhotoAttachment {
                file_id: id.to_string(),
                width,
                height,
                file_size,
            })
            .collect(),
        created_at: Utc::now(),
    }
}

pub fn is_llm_error(err: &BotError) -> bool {
    matches!(err, BotError::Llm(_))
}
