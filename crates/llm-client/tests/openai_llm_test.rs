//! Tests for [`llm_client::OpenAILlmClient`] against a mockito server standing in for the
//! OpenAI chat completions endpoint. No real API calls.

use llm_client::{ChatMessage, LlmClient, OpenAILlmClient};
use mockito::Matcher;

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
    })
    .to_string()
}

/// **Test: Text prompt is sent with model and system message; first choice content is returned.**
#[tokio::test]
async fn test_text_completion_returns_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""model":"gpt-4o-mini""#.to_string()),
            Matcher::Regex(r#""role":"system""#.to_string()),
            Matcher::Regex(r#""content":"Salom""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Va alaykum assalom!"))
        .create_async()
        .await;

    let client = OpenAILlmClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let answer = client
        .get_llm_response_with_messages(vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("Salom"),
        ])
        .await
        .expect("completion");

    assert_eq!(answer, "Va alaykum assalom!");
    mock.assert_async().await;
}

/// **Test: Image turn is sent as an image_url content part.**
#[tokio::test]
async fn test_image_completion_sends_image_url_part() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#""type":"image_url""#.to_string()),
            Matcher::Regex(r#"https://files\.example\.com/photo\.jpg"#.to_string()),
            Matcher::Regex(r#""model":"gpt-4o""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("A cat on a sofa."))
        .create_async()
        .await;

    let client = OpenAILlmClient::with_base_url("sk-test-key-123456".to_string(), server.url())
        .with_model("gpt-4o");
    let answer = client
        .get_llm_response_with_messages(vec![ChatMessage::user_with_image(
            "Describe the picture.",
            "https://files.example.com/photo.jpg",
        )])
        .await
        .unwrap();

    assert_eq!(answer, "A cat on a sofa.");
    mock.assert_async().await;
}

/// **Test: An API error is returned as Err, not as an empty answer.**
#[tokio::test]
async fn test_api_error_propagates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "error": {
                    "message": "Invalid model",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": null
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAILlmClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let result = client
        .get_llm_response_with_messages(vec![ChatMessage::user("hi")])
        .await;

    assert!(result.is_err());
}

/// **Test: A response with no choices is an error.**
#[tokio::test]
async fn test_empty_choices_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "id": "chatcmpl-empty",
                "object": "chat.completion",
                "created": 1_700_000_000u32,
                "model": "gpt-4o-mini",
                "choices": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAILlmClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let err = client
        .get_llm_response_with_messages(vec![ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No response"));
}
