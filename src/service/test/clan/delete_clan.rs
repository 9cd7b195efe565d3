use super::*;

/// Tests that a chief can delete their clan once confirmed.
///
/// Expected: both roles removed and a deletion event logged
#[tokio::test]
async fn chief_deletes_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (_, chief_role) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), chief_role);
    let service = ClanService::new(db, &gateway);
    let chief = gateway.actor(2, false);

    service.check_delete(&chief, "Alpha").await.unwrap();
    service.delete_clan(&chief, "Alpha").await.unwrap();

    assert!(!gateway.has_role("Membre Alpha"));
    assert!(!gateway.has_role("Chef Alpha"));
    assert!(!gateway.holds(UserId::new(2), "Chef Alpha"));
    assert_eq!(logged_kinds(db, "Alpha").await, vec![ClanEventKind::Deleted]);
}

/// Tests that administrators may delete clans they have no role in.
///
/// Expected: Ok from the check
#[tokio::test]
async fn administrator_may_delete_any_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let service = ClanService::new(db, &gateway);

    let result = service.check_delete(&gateway.actor(1, true), "Alpha").await;

    assert!(result.is_ok());
}

/// Tests deleting a clan that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);

    let result = service.check_delete(&gateway.actor(1, true), "Alpha").await;

    assert!(matches!(result, Err(ClanError::NotFound(ref clan)) if clan == "Alpha"));
}

/// Tests that members and outsiders cannot delete a clan.
///
/// Expected: Err(PermissionDenied) for both with no role mutation
#[tokio::test]
async fn rejects_user_without_authority() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (member_role, _) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), member_role);
    let service = ClanService::new(db, &gateway);

    let member = service.check_delete(&gateway.actor(2, false), "Alpha").await;
    let outsider = service.check_delete(&gateway.actor(3, false), "Alpha").await;

    assert!(matches!(member, Err(ClanError::PermissionDenied)));
    assert!(matches!(outsider, Err(ClanError::PermissionDenied)));
    assert_eq!(gateway.mutations(), 0);
}

/// Tests that a refused or expired confirmation leaves the clan untouched.
///
/// Expected: prompt unusable after refusal or expiry and both roles still present
#[tokio::test]
async fn refused_or_expired_confirmation_keeps_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let service = ClanService::new(db, &gateway);
    let admin = gateway.actor(1, true);
    let kind = PendingKind::DeleteClan {
        clan: "Alpha".to_string(),
    };

    service.check_delete(&admin, "Alpha").await.unwrap();

    let pending = PendingActionService::new();
    let refused = pending.register(admin.user_id, kind.clone()).await;
    assert!(pending.take(refused, admin.user_id).await.is_some());
    assert!(pending.take(refused, admin.user_id).await.is_none());

    let expiring = PendingActionService::with_ttl(std::time::Duration::from_millis(10));
    let expired = expiring.register(admin.user_id, kind).await;
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    assert!(expiring.take(expired, admin.user_id).await.is_none());

    assert!(gateway.has_role("Membre Alpha"));
    assert!(gateway.has_role("Chef Alpha"));
    assert_eq!(gateway.mutations(), 0);
}

/// Tests confirming a deletion after the clan vanished during the prompt.
///
/// Expected: Err(NotFound) and nothing deleted
#[tokio::test]
async fn confirmation_after_clan_vanished_is_not_found() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let service = ClanService::new(db, &gateway);
    let admin = gateway.actor(1, true);

    service.check_delete(&admin, "Alpha").await.unwrap();
    gateway.drop_role("Membre Alpha");
    let result = service.delete_clan(&admin, "Alpha").await;

    assert!(matches!(result, Err(ClanError::NotFound(_))));
    assert!(gateway.has_role("Chef Alpha"));
    assert_eq!(gateway.mutations(), 0);
}
