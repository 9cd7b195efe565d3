//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return. The clan logic reads guild roles and user accounts, so
//! those are the objects provided here.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_role, create_test_user};
//!
//! let member_role = create_test_role(111111111, "Membre Alpha", 0, 1);
//! let chief_role = create_test_role(222222222, "Chef Alpha", 0, 2);
//! let bot = create_test_user(333333333, "Helper", true);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_clan_role` - Create hoisted, mentionable roles like the bot creates
//! - `user::create_test_user` - Create Serenity User objects

pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use role::{create_test_clan_role, create_test_role};
pub use user::create_test_user;
