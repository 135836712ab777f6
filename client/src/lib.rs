//! # Todo Summary Client
//!
//! Client side of the todo summary API:
//!
//! - [`ApiClient`]: one typed method per endpoint
//! - [`TodoBoard`]: the list screen's view state, reconciled with server
//!   responses, with per-target busy flags and notices
//!
//! The `todo` binary is a terminal front end over both.
//!
//! ## Example
//!
//! ```no_run
//! use todo_summary_client::{ApiClient, TodoBoard};
//!
//! # async fn example() -> Result<(), todo_summary_client::ClientError> {
//! let board = TodoBoard::new(ApiClient::new("http://localhost:5000/api"));
//! board.refresh().await?;
//! board.add("Buy milk", None).await?;
//! if board.can_summarize() {
//!     println!("{}", board.summarize().await?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod board;
pub mod error;

pub use api::{ApiClient, DEFAULT_BASE_URL, MessageResponse, SummaryResponse};
pub use board::{Notice, NoticeLevel, Target, TodoBoard};
pub use error::ClientError;
