//! # Slack Notifier
//!
//! Posts a composed todo summary to a Slack incoming webhook as a Block Kit
//! message: a header, a divider, the summary as `mrkdwn`, and a footer with
//! the generation time.
//!
//! ## Example
//!
//! ```no_run
//! use todo_summary_core::Notifier;
//! use todo_summary_slack::SlackNotifier;
//!
//! # async fn example() -> Result<(), todo_summary_core::NotifyError> {
//! let notifier = SlackNotifier::new("https://hooks.slack.com/services/T000/B000/XXXX");
//! notifier.deliver("3 tasks pending").await?;
//! # Ok(())
//! # }
//! ```

pub mod message;
pub mod notifier;

pub use message::{Block, SlackMessage, TextObject, SECTION_TEXT_LIMIT};
pub use notifier::SlackNotifier;
