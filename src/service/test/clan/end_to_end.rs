use super::*;

/// Tests a clan's life from creation to a member leaving.
///
/// An administrator creates the clan, an outsider is refused when trying to leave, then
/// leaves successfully after being granted the member role and confirming.
///
/// Expected: roles created, first leave rejected, member role removed after confirmation
#[tokio::test]
async fn create_then_leave_after_joining() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);
    let pending = PendingActionService::new();

    service
        .create_clan(&gateway.actor(1, true), "Alpha")
        .await
        .unwrap();
    assert!(gateway.has_role("Membre Alpha"));
    assert!(gateway.has_role("Chef Alpha"));

    let outsider = gateway.actor(5, false);
    let mutations = gateway.mutations();
    let refused = service.check_leave(&outsider, "Alpha").await;
    assert!(matches!(refused, Err(ClanError::NotInClan(_))));
    assert_eq!(gateway.mutations(), mutations);

    let member_role = service
        .registry()
        .await
        .unwrap()
        .member_role("Alpha")
        .map(|role| role.id)
        .unwrap();
    gateway.grant(UserId::new(5), member_role);

    let member = gateway.actor(5, false);
    service.check_leave(&member, "Alpha").await.unwrap();
    let id = pending
        .register(
            member.user_id,
            PendingKind::LeaveClan {
                clan: "Alpha".to_string(),
            },
        )
        .await;

    let action = pending.take(id, member.user_id).await.unwrap();
    let PendingKind::LeaveClan { clan } = action.kind else {
        panic!("expected a leave prompt");
    };
    service.leave_clan(&member, &clan).await.unwrap();

    assert!(!gateway.holds(UserId::new(5), "Membre Alpha"));
    assert!(gateway.has_role("Membre Alpha"));
    assert_eq!(
        logged_kinds(db, "Alpha").await,
        vec![ClanEventKind::Left, ClanEventKind::Created]
    );
}
