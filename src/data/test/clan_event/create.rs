use super::*;

/// Tests appending an event with a target user.
///
/// Verifies that the repository stores every column and converts the row back into
/// a domain model with parsed IDs and kind.
///
/// Expected: Ok with event stored
#[tokio::test]
async fn appends_event_with_target() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanEventRepository::new(db);
    let event = repo
        .create(CreateClanEventParam {
            guild_id: 123456789,
            clan: "Alpha".to_string(),
            kind: ClanEventKind::Promoted,
            actor_id: 1,
            target_id: Some(2),
        })
        .await?;

    assert_eq!(event.guild_id, 123456789);
    assert_eq!(event.clan, "Alpha");
    assert_eq!(event.kind, ClanEventKind::Promoted);
    assert_eq!(event.actor_id, 1);
    assert_eq!(event.target_id, Some(2));

    let row = entity::prelude::ClanEvent::find_by_id(event.id)
        .one(db)
        .await?
        .expect("event row should exist");
    assert_eq!(row.kind, "promoted");
    assert_eq!(row.target_id.as_deref(), Some("2"));

    Ok(())
}

/// Tests that events are appended, never merged.
///
/// Verifies that recording the same change twice stores two rows.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn appends_duplicate_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanEventRepository::new(db);
    for _ in 0..2 {
        repo.create(CreateClanEventParam {
            guild_id: 1,
            clan: "Alpha".to_string(),
            kind: ClanEventKind::Created,
            actor_id: 1,
            target_id: None,
        })
        .await?;
    }

    let count = entity::prelude::ClanEvent::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
