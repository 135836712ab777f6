//! Incoming-webhook delivery.

use crate::message::SlackMessage;
use reqwest::Client;
use std::sync::Arc;
use todo_summary_core::environment::{Clock, SystemClock};
use todo_summary_core::notifier::{NotifyError, NotifyFuture, Notifier};

/// Delivers summaries to one Slack incoming webhook.
///
/// Each delivery is a single POST. Any transport error or non-2xx answer is
/// reported as [`NotifyError::DeliveryFailed`]; nothing is retried.
#[derive(Clone)]
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SlackNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The webhook URL is a credential.
        f.debug_struct("SlackNotifier").finish_non_exhaustive()
    }
}

impl SlackNotifier {
    /// Create a notifier for `webhook_url`.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url: webhook_url.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Builder: stamp messages with `clock` instead of the wall clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    async fn post(&self, summary: &str) -> Result<(), NotifyError> {
        let message = SlackMessage::summary(summary, self.clock.now());

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError::DeliveryFailed(format!("Webhook request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::DeliveryFailed(format!(
                "Webhook answered {status}: {body}"
            )));
        }

        tracing::info!(chars = summary.chars().count(), "Summary posted to Slack");
        Ok(())
    }
}

impl Notifier for SlackNotifier {
    fn name(&self) -> &'static str {
        "slack"
    }

    fn deliver<'a>(&'a self, summary: &'a str) -> NotifyFuture<'a> {
        Box::pin(self.post(summary))
    }
}
