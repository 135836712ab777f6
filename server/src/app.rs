//! Builds the shared application state from configuration.

use crate::config::{Config, NotifierConfig, StoreConfig, SummaryConfig};
use anyhow::Context;
use std::sync::Arc;
use todo_summary_anthropic::AnthropicClient;
use todo_summary_core::{
    LlmSummary, LogNotifier, Notifier, SummaryStrategy, TemplateSummary, TodoService, TodoStore,
};
use todo_summary_postgres::PostgresTodoStore;
use todo_summary_slack::SlackNotifier;
use todo_summary_testing::InMemoryTodoStore;
use todo_summary_web::AppState;
use tracing::{info, warn};

/// Connect the configured store, strategy and notifier.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let store = build_store(&config.store).await?;
    let summarizer = build_summarizer(&config.summary);
    let notifier = build_notifier(&config.notifier);

    info!(
        strategy = summarizer.name(),
        notifier = notifier.name(),
        environment = %config.server.environment,
        "Application state ready"
    );

    Ok(AppState::new(
        TodoService::new(store),
        summarizer,
        notifier,
        config.server.environment.clone(),
    ))
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn TodoStore>> {
    match config {
        StoreConfig::Postgres {
            url,
            max_connections,
        } => {
            let store = PostgresTodoStore::connect(url, *max_connections)
                .await
                .context("Failed to connect to PostgreSQL")?;
            store
                .migrate()
                .await
                .context("Failed to run database migrations")?;
            info!(max_connections, "Connected to PostgreSQL");
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => {
            warn!("Using in-memory todo store; todos are lost on restart");
            Ok(Arc::new(InMemoryTodoStore::new()))
        }
    }
}

fn build_summarizer(config: &SummaryConfig) -> Arc<dyn SummaryStrategy> {
    match config {
        SummaryConfig::Template => Arc::new(TemplateSummary),
        SummaryConfig::Llm {
            api_key,
            model,
            base_url,
            max_tokens,
        } => {
            let client = AnthropicClient::new(api_key.clone()).with_base_url(base_url.as_str());
            Arc::new(LlmSummary::new(client, model.as_str()).with_max_tokens(*max_tokens))
        }
    }
}

fn build_notifier(config: &NotifierConfig) -> Arc<dyn Notifier> {
    match config {
        NotifierConfig::Slack { webhook_url } => Arc::new(SlackNotifier::new(webhook_url.as_str())),
        NotifierConfig::Log => Arc::new(LogNotifier),
    }
}
