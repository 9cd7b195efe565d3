use super::*;

/// Tests that a chief reads the clan's recent events.
///
/// Expected: events of this clan in this guild only, newest first
#[tokio::test]
async fn chief_reads_recent_events() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (_, chief_role) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), chief_role);

    let guild = MockGateway::GUILD_ID.to_string();
    factory::clan_event::ClanEventFactory::new(db)
        .guild_id(guild.clone())
        .clan("Alpha")
        .kind("created")
        .created_at(chrono::Utc::now() - chrono::Duration::minutes(5))
        .build()
        .await
        .unwrap();
    factory::clan_event::ClanEventFactory::new(db)
        .guild_id(guild)
        .clan("Beta")
        .kind("created")
        .build()
        .await
        .unwrap();
    factory::create_clan_event(db, "42", "Alpha").await.unwrap();

    let service = ClanService::new(db, &gateway);
    let chief = gateway.actor(2, false);
    service
        .promote(&chief, UserId::new(3), "Alpha")
        .await
        .unwrap();

    let events = service.history(&chief, "Alpha").await.unwrap();

    let kinds: Vec<ClanEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ClanEventKind::Appointed, ClanEventKind::Created]);
    assert_eq!(events[0].target_id, Some(3));
}

/// Tests that members cannot read the history.
///
/// Expected: Err(PermissionDenied)
#[tokio::test]
async fn rejects_member() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (member_role, _) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), member_role);
    let service = ClanService::new(db, &gateway);

    let result = service.history(&gateway.actor(2, false), "Alpha").await;

    assert!(matches!(result, Err(ClanError::PermissionDenied)));
}

/// Tests that a failed event append does not fail the operation.
///
/// Expected: Ok and roles created despite the missing event table
#[tokio::test]
async fn event_log_failure_does_not_fail_operation() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);

    let result = service.create_clan(&gateway.actor(1, true), "Alpha").await;

    assert!(result.is_ok());
    assert!(gateway.has_role("Chef Alpha"));
}
