use super::*;
use chrono::{Duration, Utc};

/// Tests that recent events come back newest first.
///
/// Expected: Ok with events ordered by creation time descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (offset, kind) in [(3, "created"), (2, "joined"), (1, "left")] {
        factory::clan_event::ClanEventFactory::new(db)
            .guild_id("123")
            .clan("Alpha")
            .kind(kind)
            .created_at(now - Duration::minutes(offset))
            .build()
            .await?;
    }

    let repo = ClanEventRepository::new(db);
    let events = repo.get_recent_by_clan(123, "Alpha", 10).await?;

    let kinds: Vec<ClanEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ClanEventKind::Left,
            ClanEventKind::Joined,
            ClanEventKind::Created
        ]
    );

    Ok(())
}

/// Tests that other clans and other guilds are excluded.
///
/// Clan names match exactly, so "alpha" is a different clan than "Alpha".
///
/// Expected: Ok with only the matching clan's event
#[tokio::test]
async fn filters_by_guild_and_exact_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan_event(db, "123", "Alpha").await?;
    factory::create_clan_event(db, "123", "alpha").await?;
    factory::create_clan_event(db, "456", "Alpha").await?;

    let repo = ClanEventRepository::new(db);
    let events = repo.get_recent_by_clan(123, "Alpha", 10).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].clan, "Alpha");
    assert_eq!(events[0].guild_id, 123);

    Ok(())
}

/// Tests that the limit caps the number of events returned.
///
/// Expected: Ok with `limit` events
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_clan_event(db, "123", "Alpha").await?;
    }

    let repo = ClanEventRepository::new(db);
    let events = repo.get_recent_by_clan(123, "Alpha", 3).await?;

    assert_eq!(events.len(), 3);

    Ok(())
}

/// Tests that an unknown kind stored in the table surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::clan_event::ClanEventFactory::new(db)
        .guild_id("123")
        .clan("Alpha")
        .kind("renamed")
        .build()
        .await?;

    let repo = ClanEventRepository::new(db);
    let result = repo.get_recent_by_clan(123, "Alpha", 10).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
