//! Clan Bot Test Utils
//!
//! Shared testing utilities for the clan bot. The crate offers a builder for test contexts
//! backed by in-memory SQLite databases, factories for clan event rows, and factories for
//! the serenity objects (roles, users) that the clan logic consumes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ClanEvent;
//!
//! #[tokio::test]
//! async fn test_event_log() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ClanEvent)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
