//! Clan event log domain models.
//!
//! Handles conversion between `clan_event` entity models and domain models at the
//! repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;
use std::str::FromStr;

/// Kind of change recorded in the clan event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClanEventKind {
    Created,
    Deleted,
    Invited,
    Joined,
    Left,
    Promoted,
    Appointed,
}

impl ClanEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deleted => "deleted",
            Self::Invited => "invited",
            Self::Joined => "joined",
            Self::Left => "left",
            Self::Promoted => "promoted",
            Self::Appointed => "appointed",
        }
    }
}

impl fmt::Display for ClanEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClanEventKind {
    type Err = DbErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "deleted" => Ok(Self::Deleted),
            "invited" => Ok(Self::Invited),
            "joined" => Ok(Self::Joined),
            "left" => Ok(Self::Left),
            "promoted" => Ok(Self::Promoted),
            "appointed" => Ok(Self::Appointed),
            other => Err(DbErr::Custom(format!("Unknown clan event kind: {}", other))),
        }
    }
}

/// A recorded clan lifecycle or membership change.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanEvent {
    pub id: i32,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    pub clan: String,
    pub kind: ClanEventKind,
    /// Discord ID of the user who performed the change.
    pub actor_id: u64,
    /// Discord ID of the user affected by the change, when different from the actor.
    pub target_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl ClanEvent {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ClanEvent)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - An ID column failed to parse as u64 or the kind is unknown
    pub fn from_entity(entity: entity::clan_event::Model) -> Result<Self, DbErr> {
        let guild_id = parse_id("guild_id", &entity.guild_id)?;
        let actor_id = parse_id("actor_id", &entity.actor_id)?;
        let target_id = entity
            .target_id
            .as_deref()
            .map(|id| parse_id("target_id", id))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            guild_id,
            clan: entity.clan,
            kind: entity.kind.parse()?,
            actor_id,
            target_id,
            created_at: entity.created_at,
        })
    }
}

fn parse_id(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Parameters for appending an event to the clan event log.
#[derive(Debug, Clone)]
pub struct CreateClanEventParam {
    pub guild_id: u64,
    pub clan: String,
    pub kind: ClanEventKind,
    pub actor_id: u64,
    pub target_id: Option<u64>,
}
