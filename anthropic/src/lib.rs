//! # Anthropic Messages API Client
//!
//! A small, non-streaming client for the Anthropic Messages API. The todo
//! summary service only needs a single prompt/response round trip, so this
//! crate exposes exactly that.
//!
//! ## Example
//!
//! ```no_run
//! use todo_summary_anthropic::{AnthropicClient, Message, MessagesRequest};
//!
//! # async fn example() -> Result<(), todo_summary_anthropic::ClaudeError> {
//! let client = AnthropicClient::new("sk-ant-...".to_string());
//!
//! let request = MessagesRequest::new(vec![Message::user("Summarize my day")])
//!     .with_max_tokens(500);
//!
//! let response = client.messages(request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod messages;
pub mod types;

// Re-export main types for convenience
pub use client::{AnthropicClient, DEFAULT_API_URL};
pub use error::ClaudeError;
pub use messages::{MessagesRequest, MessagesResponse, DEFAULT_MODEL};
pub use types::{ContentBlock, Message, Role, StopReason, Usage};
