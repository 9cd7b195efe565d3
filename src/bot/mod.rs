//! Discord surface of the clan bot.
//!
//! The bot registers the clan slash commands and user context menus on the configured
//! guild, answers every invocation with an ephemeral embed, and drives the confirm and
//! selection prompts through message components.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and role events
//! - `GUILD_MEMBERS` - Member role data for the invoking and targeted users (privileged
//!   intent, must be enabled in the Discord Developer Portal)

pub mod command;
pub mod component;
pub mod handler;
pub mod response;
pub mod start;
