use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanEvent::Id))
                    .col(string(ClanEvent::GuildId))
                    .col(string(ClanEvent::Clan))
                    .col(string(ClanEvent::Kind))
                    .col(string(ClanEvent::ActorId))
                    .col(string_null(ClanEvent::TargetId))
                    .col(timestamp_with_time_zone(ClanEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clan_event_guild_clan")
                    .table(ClanEvent::Table)
                    .col(ClanEvent::GuildId)
                    .col(ClanEvent::Clan)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClanEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanEvent {
    Table,
    Id,
    GuildId,
    Clan,
    Kind,
    ActorId,
    TargetId,
    CreatedAt,
}
