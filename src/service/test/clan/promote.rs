use super::*;

/// Tests promoting a member of the clan.
///
/// Expected: Promoted, target holds `Chef Alpha` and no longer `Membre Alpha`
#[tokio::test]
async fn promotes_member_to_chief() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (member_role, _) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(3), member_role);
    let service = ClanService::new(db, &gateway);

    let promotion = service
        .promote(&gateway.actor(1, true), UserId::new(3), "Alpha")
        .await
        .unwrap();

    assert_eq!(promotion, Promotion::Promoted);
    assert!(gateway.holds(UserId::new(3), "Chef Alpha"));
    assert!(!gateway.holds(UserId::new(3), "Membre Alpha"));
    assert_eq!(logged_kinds(db, "Alpha").await, vec![ClanEventKind::Promoted]);
}

/// Tests appointing someone who holds neither clan role.
///
/// Expected: Appointed, target holds `Chef Alpha` only
#[tokio::test]
async fn appoints_outsider_directly() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (_, chief_role) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), chief_role);
    let service = ClanService::new(db, &gateway);

    let promotion = service
        .promote(&gateway.actor(2, false), UserId::new(3), "Alpha")
        .await
        .unwrap();

    assert_eq!(promotion, Promotion::Appointed);
    assert!(gateway.holds(UserId::new(3), "Chef Alpha"));
    assert!(!gateway.holds(UserId::new(3), "Membre Alpha"));
    assert_eq!(logged_kinds(db, "Alpha").await, vec![ClanEventKind::Appointed]);
}

/// Tests promoting someone who is already chief.
///
/// Expected: Err(AlreadyChief) with no role mutation
#[tokio::test]
async fn rejects_existing_chief() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (_, chief_role) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(3), chief_role);
    let service = ClanService::new(db, &gateway);

    let result = service
        .promote(&gateway.actor(1, true), UserId::new(3), "Alpha")
        .await;

    assert!(matches!(result, Err(ClanError::AlreadyChief(ref clan)) if clan == "Alpha"));
    assert_eq!(gateway.mutations(), 0);
}

/// Tests the clans offered for promotion.
///
/// Expected: every clan for administrators, chiefed clans for anyone else
#[tokio::test]
async fn administrators_see_every_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let (_, beta_chief) = gateway.add_clan("Beta");
    gateway.grant(UserId::new(2), beta_chief);
    let service = ClanService::new(db, &gateway);

    let admin = service
        .promote_options(&gateway.actor(1, true))
        .await
        .unwrap();
    let chief = service
        .promote_options(&gateway.actor(2, false))
        .await
        .unwrap();
    let outsider = service
        .promote_options(&gateway.actor(3, false))
        .await
        .unwrap();

    assert_eq!(admin, vec!["Alpha".to_string(), "Beta".to_string()]);
    assert_eq!(chief, vec!["Beta".to_string()]);
    assert!(outsider.is_empty());
}

/// Tests promoting into a clan deleted while the selection was open.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn selection_after_deletion_is_not_found() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    gateway.drop_role("Chef Alpha");
    let service = ClanService::new(db, &gateway);

    let result = service
        .promote(&gateway.actor(1, true), UserId::new(3), "Alpha")
        .await;

    assert!(matches!(result, Err(ClanError::NotFound(_))));
    assert_eq!(gateway.mutations(), 0);
}
