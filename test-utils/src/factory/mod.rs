//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity
//! has a `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let event = factory::create_clan_event(&db, "123456789", "Alpha").await?;
//!
//! // Customize through the builder
//! let event = factory::clan_event::ClanEventFactory::new(&db)
//!     .clan("Alpha")
//!     .kind("joined")
//!     .target_id(Some("42".to_string()))
//!     .build()
//!     .await?;
//! ```

pub mod clan_event;
pub mod helpers;

pub use clan_event::create_clan_event;
