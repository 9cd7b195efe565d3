//! Clan event factory for creating test event log rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clan events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::clan_event::ClanEventFactory;
///
/// let event = ClanEventFactory::new(&db)
///     .guild_id("123456789")
///     .clan("Alpha")
///     .kind("created")
///     .build()
///     .await?;
/// ```
pub struct ClanEventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    clan: String,
    kind: String,
    actor_id: String,
    target_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ClanEventFactory<'a> {
    /// Creates a new ClanEventFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"100000000000000000"`
    /// - clan: `"Clan {id}"` where id is auto-incremented
    /// - kind: `"created"`
    /// - actor_id: `"{id}"`
    /// - target_id: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: "100000000000000000".to_string(),
            clan: format!("Clan {}", id),
            kind: "created".to_string(),
            actor_id: id.to_string(),
            target_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn clan(mut self, clan: impl Into<String>) -> Self {
        self.clan = clan.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }

    pub fn target_id(mut self, target_id: Option<String>) -> Self {
        self.target_id = target_id;
        self
    }

    /// Sets the creation timestamp, used to control event ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the clan event into the database.
    ///
    /// # Returns
    /// - `Ok(entity::clan_event::Model)` - Created event row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::clan_event::Model, DbErr> {
        entity::clan_event::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            clan: ActiveValue::Set(self.clan),
            kind: ActiveValue::Set(self.kind),
            actor_id: ActiveValue::Set(self.actor_id),
            target_id: ActiveValue::Set(self.target_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clan event with default values for the given guild and clan.
///
/// Shorthand for `ClanEventFactory::new(db).guild_id(guild_id).clan(clan).build().await`.
pub async fn create_clan_event(
    db: &DatabaseConnection,
    guild_id: &str,
    clan: &str,
) -> Result<entity::clan_event::Model, DbErr> {
    ClanEventFactory::new(db)
        .guild_id(guild_id)
        .clan(clan)
        .build()
        .await
}
