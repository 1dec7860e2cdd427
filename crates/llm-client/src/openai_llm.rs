//! OpenAI implementation of [`LlmClient`]: one non-streamed chat completion per call.

use anyhow::Result;
use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{chat_message_to_openai, mask::mask_token, ChatMessage, LlmClient};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// [`LlmClient`] backed by async-openai. Messages are sent exactly as given; callers supply
/// their own system instruction.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    /// Kept only for masked logging.
    api_key_for_logging: String,
}

impl OpenAILlmClient {
    /// Builds a client with a custom base URL (proxies, compatible endpoints, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let image_count: usize = messages.iter().map(|m| m.image_urls.len()).sum();
        info!(
            message_count = messages.len(),
            image_count,
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenAI chat_completion request"
        );

        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(openai_messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
