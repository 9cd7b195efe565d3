//! Domain errors for clan commands and workflows.

use sea_orm::DbErr;
use serenity::http::HttpError;
use thiserror::Error;

/// Outcome of a clan operation that did not succeed.
///
/// Variants split into two groups. Precondition failures (`PermissionDenied`, `NotFound`,
/// `AlreadyExists`, `AlreadyChief`, `NotInClan`, `InvalidTarget`) are expected results of
/// user input and are never logged as errors. Platform failures (`MissingBotPermission`,
/// `RequestFailed`, `Database`) are faults: they are logged with their cause and reported
/// once, with no retry.
#[derive(Error, Debug)]
pub enum ClanError {
    /// The invoking user lacks the guild permission or clan role the action requires.
    #[error("invoker is not allowed to perform this action")]
    PermissionDenied,

    /// No `Membre <clan>` role exists on the guild, or a clan role vanished before a
    /// confirmed action ran.
    #[error("clan {0} does not exist")]
    NotFound(String),

    /// A clan with this name already exists.
    #[error("clan {0} already exists")]
    AlreadyExists(String),

    /// The target user already holds `Chef <clan>`.
    #[error("target is already chief of clan {0}")]
    AlreadyChief(String),

    /// The invoking user holds neither role of the clan they try to leave.
    #[error("invoker is not in clan {0}")]
    NotInClan(String),

    /// The targeted account cannot take part in clans (bot accounts).
    #[error("user {0} is a bot account")]
    InvalidTarget(String),

    /// Discord rejected the request because the bot lacks a permission (HTTP 403).
    #[error("bot is missing permissions: {0}")]
    MissingBotPermission(#[source] Box<serenity::Error>),

    /// Any other Discord request failure (network, rate limit, unexpected rejection).
    #[error("Discord request failed: {0}")]
    RequestFailed(#[source] Box<serenity::Error>),

    /// The clan event log could not be read.
    #[error("clan history unavailable: {0}")]
    Database(#[from] DbErr),
}

impl ClanError {
    /// Classifies a serenity error raised by a platform call.
    ///
    /// An unsuccessful HTTP response with status 403 maps to `MissingBotPermission`;
    /// everything else maps to `RequestFailed`.
    pub fn from_discord(err: serenity::Error) -> Self {
        let forbidden = matches!(
            &err,
            serenity::Error::Http(HttpError::UnsuccessfulRequest(resp))
                if resp.status_code.as_u16() == 403
        );

        if forbidden {
            ClanError::MissingBotPermission(Box::new(err))
        } else {
            ClanError::RequestFailed(Box::new(err))
        }
    }

    /// Whether this error is a platform fault that must be logged at error level.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            ClanError::MissingBotPermission(_)
                | ClanError::RequestFailed(_)
                | ClanError::Database(_)
        )
    }
}

impl From<serenity::Error> for ClanError {
    fn from(err: serenity::Error) -> Self {
        ClanError::from_discord(err)
    }
}
