//! `SlackNotifier` against a mocked incoming webhook.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use serde_json::json;
use std::sync::Arc;
use todo_summary_core::{Notifier, NotifyError};
use todo_summary_slack::SlackNotifier;
use todo_summary_testing::test_clock;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier(server: &MockServer) -> SlackNotifier {
    SlackNotifier::new(format!("{}/services/T000/B000/XXXX", server.uri()))
        .with_clock(Arc::new(test_clock()))
}

#[tokio::test]
async fn test_delivers_block_kit_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/T000/B000/XXXX"))
        .and(body_json(json!({
            "text": "📋 Todo Summary Report\nAll done",
            "blocks": [
                {"type": "header", "text": {"type": "plain_text", "text": "📋 Todo Summary Report", "emoji": true}},
                {"type": "divider"},
                {"type": "section", "text": {"type": "mrkdwn", "text": "All done"}},
                {"type": "context", "elements": [
                    {"type": "mrkdwn", "text": "*Generated on:* 2025-01-01 00:00:00 UTC"}
                ]}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server).deliver("All done").await.unwrap();
}

#[tokio::test]
async fn test_rejected_webhook_is_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
        .expect(1)
        .mount(&server)
        .await;

    let err = notifier(&server).deliver("All done").await.unwrap_err();
    let NotifyError::DeliveryFailed(reason) = err;
    assert!(reason.contains("404"));
    assert!(reason.contains("no_service"));
}

#[tokio::test]
async fn test_unreachable_webhook_is_delivery_failure() {
    let notifier = SlackNotifier::new("http://127.0.0.1:1/hook");
    let err = notifier.deliver("All done").await.unwrap_err();
    assert!(matches!(err, NotifyError::DeliveryFailed(_)));
}

#[test]
fn test_debug_hides_webhook_url() {
    let notifier = SlackNotifier::new("https://hooks.slack.com/services/secret");
    assert!(!format!("{notifier:?}").contains("secret"));
}
