//! `LlmSummary` against a mocked Messages API.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use chrono::Utc;
use serde_json::json;
use todo_summary_anthropic::AnthropicClient;
use todo_summary_core::{LlmSummary, SummaryError, SummaryStrategy, Todo, TodoId};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todos() -> Vec<Todo> {
    vec![
        Todo {
            id: TodoId::new(),
            title: "File taxes".to_string(),
            description: "before April".to_string(),
            completed: false,
            created_at: Utc::now(),
        },
        Todo {
            id: TodoId::new(),
            title: "Renew passport".to_string(),
            description: String::new(),
            completed: true,
            created_at: Utc::now(),
        },
    ]
}

fn strategy(server: &MockServer) -> LlmSummary {
    let client = AnthropicClient::new("key".to_string()).with_base_url(server.uri());
    LlmSummary::new(client, "claude-test")
}

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "msg_1",
        "model": "claude-test",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 40, "output_tokens": 12}
    })
}

#[tokio::test]
async fn test_generated_text_is_returned_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_string_contains("File taxes: before April (Pending)"))
        .and(body_string_contains("Renew passport (Completed)"))
        .and(body_string_contains("\"model\":\"claude-test\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("\n  One pending task.  \n")))
        .expect(1)
        .mount(&server)
        .await;

    let summary = strategy(&server).compose(&todos()).await.unwrap();
    assert_eq!(summary, "One pending task.");
}

#[tokio::test]
async fn test_completion_budget_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("\"max_tokens\":200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Short.")))
        .expect(1)
        .mount(&server)
        .await;

    let summary = strategy(&server)
        .with_max_tokens(200)
        .compose(&todos())
        .await
        .unwrap();
    assert_eq!(summary, "Short.");
}

#[tokio::test]
async fn test_blank_completion_is_generation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ")))
        .mount(&server)
        .await;

    let err = strategy(&server).compose(&todos()).await.unwrap_err();
    assert!(matches!(err, SummaryError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_api_error_is_generation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = strategy(&server).compose(&todos()).await.unwrap_err();
    assert!(matches!(err, SummaryError::GenerationFailed(_)));
}

#[tokio::test]
async fn test_empty_input_never_calls_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let err = strategy(&server).compose(&[]).await.unwrap_err();
    assert!(matches!(err, SummaryError::EmptyInput));
}
