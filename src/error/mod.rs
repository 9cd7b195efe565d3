//! Error types for the clan bot.
//!
//! `AppError` covers startup and infrastructure failures that stop the process, while
//! `ClanError` is the domain taxonomy every interaction handler reports back to the
//! invoking user. Interaction handlers never propagate `ClanError` past the event loop;
//! each one is rendered as exactly one ephemeral response.

pub mod clan;
pub mod config;

use thiserror::Error;

pub use clan::ClanError;
pub use config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the errors that can occur while starting the bot. Most variants use
/// `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
