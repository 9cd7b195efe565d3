use crate::{
    error::ClanError,
    model::{
        clan::{Actor, Promotion, Target},
        clan_event::ClanEventKind,
        pending::PendingKind,
    },
    service::{clan::ClanService, pending::PendingActionService},
};
use sea_orm::DatabaseConnection;
use serenity::all::{CreateMessage, UserId};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use self::guild::MockGateway;


/// Builds a context with the clan event log table.
async fn setup() -> TestContext {
    TestBuilder::new().with_clan_tables().build().await.unwrap()
}

/// Kinds of every event logged for `clan`, newest first.
async fn logged_kinds(db: &DatabaseConnection, clan: &str) -> Vec<ClanEventKind> {
    crate::data::clan_event::ClanEventRepository::new(db)
        .get_recent_by_clan(MockGateway::GUILD_ID, clan, 50)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.kind)
        .collect()
}
