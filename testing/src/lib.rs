//! # Todo Summary Testing
//!
//! Test doubles for the todo summary backend.
//!
//! This crate provides:
//! - [`InMemoryTodoStore`]: a `TodoStore` kept in process memory. Besides
//!   tests it backs the server's non-durable `STORE_BACKEND=memory` mode.
//! - [`FixedClock`]: deterministic time
//! - [`ScriptedSummary`] and [`RecordingNotifier`]: doubles for the summary
//!   and notification seams
//!
//! ## Example
//!
//! ```
//! use todo_summary_core::TodoService;
//! use todo_summary_testing::{test_clock, InMemoryTodoStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), todo_summary_core::TodoError> {
//! let store = Arc::new(InMemoryTodoStore::with_clock(Arc::new(test_clock())));
//! let service = TodoService::new(store);
//!
//! let todo = service.create_todo("Buy milk", None).await?;
//! assert!(!todo.completed);
//! # Ok(())
//! # }
//! ```

pub mod doubles;
pub mod memory_store;

use chrono::{DateTime, Utc};
use todo_summary_core::environment::Clock;

/// Mock implementations of Environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_summary_testing::mocks::FixedClock;
    /// use todo_summary_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }
}

// Re-export commonly used items
pub use doubles::{RecordingNotifier, ScriptedSummary};
pub use memory_store::InMemoryTodoStore;
pub use mocks::{FixedClock, test_clock};
