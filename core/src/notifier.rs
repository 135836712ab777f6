//! Delivery of a composed summary to a messaging endpoint.

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors produced while delivering a summary.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request failed or the endpoint answered with a non-success status.
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Boxed future returned by [`Notifier::deliver`].
pub type NotifyFuture<'a> = Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + 'a>>;

/// Sends a summary somewhere a human will read it.
///
/// Implementations make a single attempt: no retries, and no confirmation
/// beyond the transport's own success signal.
pub trait Notifier: Send + Sync {
    /// Short name for logs (`"slack"`, `"log"`).
    fn name(&self) -> &'static str;

    /// Deliver `summary`.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryFailed` when the message could not be delivered.
    fn deliver<'a>(&'a self, summary: &'a str) -> NotifyFuture<'a>;
}

/// Development notifier that writes the summary to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver<'a>(&'a self, summary: &'a str) -> NotifyFuture<'a> {
        tracing::info!(summary = %summary, "Summary delivered to log notifier");
        Box::pin(std::future::ready(Ok(())))
    }
}
