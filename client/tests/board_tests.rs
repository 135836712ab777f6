//! `ApiClient` and `TodoBoard` against a mocked API.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use serde_json::{Value, json};
use std::time::Duration;
use todo_summary_client::{ApiClient, ClientError, Notice, NoticeLevel, Target, TodoBoard};
use todo_summary_core::TodoId;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todo_json(id: TodoId, title: &str, completed: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "completed": completed,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

async fn board_with(server: &MockServer, todos: Value) -> TodoBoard {
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todos))
        .mount(server)
        .await;

    let board = TodoBoard::new(ApiClient::new(format!("{}/api", server.uri())));
    board.refresh().await.unwrap();
    board
}

fn success(text: &str) -> Notice {
    Notice {
        level: NoticeLevel::Success,
        text: text.to_string(),
    }
}

#[tokio::test]
async fn test_refresh_loads_server_order() {
    let server = MockServer::start().await;
    let (a, b) = (TodoId::new(), TodoId::new());
    let board = board_with(
        &server,
        json!([todo_json(b, "Newer", false), todo_json(a, "Older", true)]),
    )
    .await;

    let titles: Vec<String> = board.todos().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
    assert!(board.can_summarize());
    assert!(board.load_error().is_none());
}

#[tokio::test]
async fn test_refresh_failure_sets_load_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Todo store unavailable"})))
        .mount(&server)
        .await;

    let board = TodoBoard::new(ApiClient::new(format!("{}/api", server.uri())));
    let err = board.refresh().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Todo store unavailable");
    assert_eq!(
        board.load_error().as_deref(),
        Some("Failed to fetch todos. Please try again later.")
    );
}

#[tokio::test]
async fn test_add_prepends_server_todo() {
    let server = MockServer::start().await;
    let existing = TodoId::new();
    let board = board_with(&server, json!([todo_json(existing, "Older", false)])).await;

    let created = TodoId::new();
    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(json!({"title": "Buy milk", "description": "2 litres"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(todo_json(created, "Buy milk", false)))
        .expect(1)
        .mount(&server)
        .await;

    let todo = board.add("Buy milk", Some("2 litres")).await.unwrap();

    assert_eq!(todo.id, created);
    let ids: Vec<TodoId> = board.todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![created, existing]);
    assert_eq!(board.take_notices(), vec![success("Todo added successfully!")]);
}

#[tokio::test]
async fn test_add_rejected_by_server_keeps_list() {
    let server = MockServer::start().await;
    let board = board_with(&server, json!([])).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Title is required"})))
        .mount(&server)
        .await;

    let err = board.add("x", None).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert!(board.todos().is_empty());
    let notices = board.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].text.contains("Title is required"));
}

#[tokio::test]
async fn test_toggle_sends_flipped_flag_and_replaces_item() {
    let server = MockServer::start().await;
    let id = TodoId::new();
    let board = board_with(&server, json!([todo_json(id, "Water plants", false)])).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/todos/{id}")))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json(id, "Water plants", true)))
        .expect(1)
        .mount(&server)
        .await;

    board.toggle(id).await.unwrap();

    assert!(board.todos()[0].completed);
}

#[tokio::test]
async fn test_edit_sends_title_and_description() {
    let server = MockServer::start().await;
    let id = TodoId::new();
    let board = board_with(&server, json!([todo_json(id, "Milk", false)])).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/todos/{id}")))
        .and(body_json(json!({"title": "Oat milk", "description": "organic"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "title": "Oat milk",
            "description": "organic",
            "completed": false,
            "created_at": "2025-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    board.edit(id, "Oat milk", Some("organic")).await.unwrap();

    let todo = &board.todos()[0];
    assert_eq!(todo.title, "Oat milk");
    assert_eq!(todo.description, "organic");
}

#[tokio::test]
async fn test_remove_drops_item_only_after_success() {
    let server = MockServer::start().await;
    let (keep, gone, missing) = (TodoId::new(), TodoId::new(), TodoId::new());
    let board = board_with(
        &server,
        json!([
            todo_json(gone, "Remove", false),
            todo_json(keep, "Keep", false),
            todo_json(missing, "Stale", false)
        ]),
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/todos/{gone}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Todo deleted successfully"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/todos/{missing}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Todo not found"})))
        .mount(&server)
        .await;

    board.remove(gone).await.unwrap();
    let err = board.remove(missing).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    let ids: Vec<TodoId> = board.todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![keep, missing]);
}

#[tokio::test]
async fn test_summarize_stores_summary_and_notifies() {
    let server = MockServer::start().await;
    let board = board_with(&server, json!([todo_json(TodoId::new(), "File taxes", false)])).await;

    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Summary sent to Slack successfully",
            "summary": "1 task pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = board.summarize().await.unwrap();

    assert_eq!(summary, "1 task pending");
    assert_eq!(board.summary().as_deref(), Some("1 task pending"));
    assert_eq!(
        board.take_notices(),
        vec![success("Summary sent to Slack successfully")]
    );
}

#[tokio::test]
async fn test_summarize_failure_keeps_list_and_summary() {
    let server = MockServer::start().await;
    let board = board_with(&server, json!([todo_json(TodoId::new(), "File taxes", false)])).await;

    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to send summary to Slack"})))
        .mount(&server)
        .await;

    assert!(board.summarize().await.is_err());

    assert_eq!(board.todos().len(), 1);
    assert!(board.summary().is_none());
    let notices = board.take_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].text, "Failed to generate summary.");
}

#[tokio::test]
async fn test_second_request_for_same_todo_is_busy() {
    let server = MockServer::start().await;
    let id = TodoId::new();
    let board = board_with(&server, json!([todo_json(id, "Slow", false)])).await;

    Mock::given(method("PUT"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(todo_json(id, "Slow", true))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let first = tokio::spawn({
        let board = board.clone();
        async move { board.toggle(id).await }
    });

    let mut waited = 0;
    while !board.is_busy(Target::Todo(id)) && waited < 100 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        waited += 1;
    }
    assert!(board.is_busy(Target::Todo(id)));
    assert!(matches!(board.remove(id).await, Err(ClientError::Busy)));

    first.await.unwrap().unwrap();
    assert!(!board.is_busy(Target::Todo(id)));
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let board = TodoBoard::new(ApiClient::new("http://127.0.0.1:1/api"));
    assert!(matches!(board.refresh().await, Err(ClientError::Request(_))));
}
