//! State shared by every event handler.
//!
//! Initialized once at startup and cloned into the serenity event handler. All fields are
//! cheap to clone: the database connection is a pool and the pending prompt table is
//! reference counted.

use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Http};
use std::sync::Arc;

use crate::service::{gateway::SerenityGateway, pending::PendingActionService};

#[derive(Clone)]
pub struct AppState {
    /// Clan event log storage.
    pub db: DatabaseConnection,
    /// Prompts awaiting a click or a selection.
    pub pending: PendingActionService,
    /// The guild whose clans are managed.
    pub guild_id: GuildId,
}

impl AppState {
    pub fn new(db: DatabaseConnection, pending: PendingActionService, guild_id: GuildId) -> Self {
        Self {
            db,
            pending,
            guild_id,
        }
    }

    /// Gateway to the managed guild over the given HTTP client.
    pub fn gateway(&self, http: &Arc<Http>) -> SerenityGateway {
        SerenityGateway::new(http.clone(), self.guild_id)
    }
}
