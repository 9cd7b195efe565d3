use super::*;

/// Tests a member leaving their clan.
///
/// Expected: member role removed and a leave event logged
#[tokio::test]
async fn member_leaves_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (member_role, _) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), member_role);
    let service = ClanService::new(db, &gateway);
    let member = gateway.actor(2, false);

    service.check_leave(&member, "Alpha").await.unwrap();
    service.leave_clan(&member, "Alpha").await.unwrap();

    assert!(!gateway.holds(UserId::new(2), "Membre Alpha"));
    assert!(gateway.has_role("Membre Alpha"));
    assert_eq!(logged_kinds(db, "Alpha").await, vec![ClanEventKind::Left]);
}

/// Tests that leaving removes both roles whichever subset the user holds.
///
/// Expected: a chief-only user and a chief-and-member user both end with neither role
#[tokio::test]
async fn removes_both_roles_regardless_of_subset() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let (member_role, chief_role) = gateway.add_clan("Alpha");
    gateway.grant(UserId::new(2), chief_role);
    gateway.grant(UserId::new(3), member_role);
    gateway.grant(UserId::new(3), chief_role);
    let service = ClanService::new(db, &gateway);

    for user in [2, 3] {
        let actor = gateway.actor(user, false);
        service.check_leave(&actor, "Alpha").await.unwrap();
        service.leave_clan(&actor, "Alpha").await.unwrap();

        assert!(!gateway.holds(actor.user_id, "Membre Alpha"));
        assert!(!gateway.holds(actor.user_id, "Chef Alpha"));
    }
    assert_eq!(gateway.mutations(), 4);
}

/// Tests leaving a clan the user is not part of.
///
/// Expected: Err(NotInClan) with no role mutation
#[tokio::test]
async fn rejects_user_not_in_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let service = ClanService::new(db, &gateway);

    let result = service.check_leave(&gateway.actor(2, false), "Alpha").await;

    assert!(matches!(result, Err(ClanError::NotInClan(ref clan)) if clan == "Alpha"));
    assert_eq!(gateway.mutations(), 0);
}

/// Tests leaving a clan that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);

    let result = service.check_leave(&gateway.actor(2, false), "Alpha").await;

    assert!(matches!(result, Err(ClanError::NotFound(_))));
}
