//! Clan event repository for the append-only clan history.
//!
//! Events are only ever inserted and read back; nothing updates or deletes them, so the
//! log survives the deletion of the clan it describes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::clan_event::{ClanEvent, CreateClanEventParam};

/// Repository for clan event log operations.
pub struct ClanEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanEventRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an event to the log, timestamped now.
    ///
    /// # Arguments
    /// - `param` - Guild, clan, kind and the users involved
    ///
    /// # Returns
    /// - `Ok(ClanEvent)` - The stored event as a domain model
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateClanEventParam) -> Result<ClanEvent, DbErr> {
        let entity = entity::clan_event::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            clan: ActiveValue::Set(param.clan),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            actor_id: ActiveValue::Set(param.actor_id.to_string()),
            target_id: ActiveValue::Set(param.target_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ClanEvent::from_entity(entity)
    }

    /// Gets the most recent events of a clan, newest first.
    ///
    /// Clan names are matched exactly, as role names are.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the clan belongs to
    /// - `clan` - Clan name
    /// - `limit` - Maximum number of events to return
    ///
    /// # Returns
    /// - `Ok(Vec<ClanEvent>)` - Up to `limit` events ordered newest first
    /// - `Err(DbErr)` - Database error during query or conversion
    pub async fn get_recent_by_clan(
        &self,
        guild_id: u64,
        clan: &str,
        limit: u64,
    ) -> Result<Vec<ClanEvent>, DbErr> {
        let entities = entity::prelude::ClanEvent::find()
            .filter(entity::clan_event::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::clan_event::Column::Clan.eq(clan))
            .order_by_desc(entity::clan_event::Column::CreatedAt)
            .order_by_desc(entity::clan_event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(ClanEvent::from_entity).collect()
    }
}
