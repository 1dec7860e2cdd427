//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. Transport-agnostic; the bot's
//! text and photo handlers depend only on the trait.
//!
//! A request is a list of [`ChatMessage`]s (one element of the OpenAI `messages` array each).
//! User messages may carry image URLs, which are sent as `image_url` content parts.

use anyhow::Result;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContentPart, ImageDetail,
    ImageUrlArgs,
};
use async_trait::async_trait;

mod mask;
mod openai_llm;

pub use mask::mask_token;
pub use openai_llm::{OpenAILlmClient, DEFAULT_MODEL};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message. `image_urls` is only meaningful for [`MessageRole::User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub image_urls: Vec<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
            image_urls: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            image_urls: Vec::new(),
        }
    }

    /// User turn made of an instruction text followed by one image.
    pub fn user_with_image(content: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            image_urls: vec![image_url.into()],
        }
    }
}

/// LLM client interface: one completion for a list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system/user/assistant).
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User if msg.image_urls.is_empty() => {
            ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()?
                .into()
        }
        MessageRole::User => {
            let mut parts: Vec<ChatCompletionRequestUserMessageContentPart> =
                vec![ChatCompletionRequestMessageContentPartTextArgs::default()
                    .text(content)
                    .build()?
                    .into()];
            for url in &msg.image_urls {
                parts.push(
                    ChatCompletionRequestMessageContentPartImageArgs::default()
                        .image_url(
                            ImageUrlArgs::default()
                                .url(url.clone())
                                .detail(ImageDetail::Auto)
                                .build()?,
                        )
                        .build()?
                        .into(),
                );
            }
            ChatCompletionRequestUserMessageArgs::default()
                .content(parts)
                .build()?
                .into()
        }
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_image_serializes_content_parts() {
        let msg = ChatMessage::user_with_image("What is this?", "https://example.com/a.jpg");
        let openai = chat_message_to_openai(&msg).unwrap();
        let json = serde_json::to_value(&openai).unwrap();

        assert_eq!(json["role"], "user");
        let parts = json["content"].as_array().expect("content parts");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "What is this?");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "https://example.com/a.jpg");
    }

    #[test]
    fn test_plain_user_and_system_serialize_as_strings() {
        let system = serde_json::to_value(
            chat_message_to_openai(&ChatMessage::system("be helpful")).unwrap(),
        )
        .unwrap();
        let user =
            serde_json::to_value(chat_message_to_openai(&ChatMessage::user("hi")).unwrap())
                .unwrap();

        assert_eq!(system["role"], "system");
        assert_eq!(system["content"], "be helpful");
        assert_eq!(user["role"], "user");
        assert_eq!(user["content"], "hi");
    }
}
