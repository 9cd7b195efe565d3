use super::*;

/// Tests that an administrator creates both roles of a new clan.
///
/// Expected: `Membre Alpha` and `Chef Alpha` exist and a creation event is logged
#[tokio::test]
async fn creates_member_and_chief_roles() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);

    service
        .create_clan(&gateway.actor(1, true), "Alpha")
        .await
        .unwrap();

    assert!(gateway.has_role("Membre Alpha"));
    assert!(gateway.has_role("Chef Alpha"));
    assert_eq!(gateway.mutations(), 2);
    assert_eq!(logged_kinds(db, "Alpha").await, vec![ClanEventKind::Created]);
}

/// Tests that creating an existing clan again is rejected.
///
/// Expected: Err(AlreadyExists) and no duplicate roles
#[tokio::test]
async fn rejects_existing_clan() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);
    let admin = gateway.actor(1, true);

    service.create_clan(&admin, "Alpha").await.unwrap();
    let result = service.create_clan(&admin, "Alpha").await;

    assert!(matches!(result, Err(ClanError::AlreadyExists(ref clan)) if clan == "Alpha"));
    assert_eq!(gateway.count_roles("Membre Alpha"), 1);
    assert_eq!(gateway.count_roles("Chef Alpha"), 1);
}

/// Tests that clan names are matched exactly.
///
/// Expected: "alpha" is a different clan from "Alpha"
#[tokio::test]
async fn clan_names_are_case_sensitive() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.add_clan("Alpha");
    let service = ClanService::new(db, &gateway);

    service
        .create_clan(&gateway.actor(1, true), "alpha")
        .await
        .unwrap();

    assert!(gateway.has_role("Membre alpha"));
    assert_eq!(gateway.count_roles("Membre Alpha"), 1);
}

/// Tests that non-administrators cannot create clans.
///
/// Expected: Err(PermissionDenied) with no role created
#[tokio::test]
async fn rejects_non_administrator() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    let service = ClanService::new(db, &gateway);

    let result = service.create_clan(&gateway.actor(1, false), "Alpha").await;

    assert!(matches!(result, Err(ClanError::PermissionDenied)));
    assert_eq!(gateway.mutations(), 0);
    assert!(logged_kinds(db, "Alpha").await.is_empty());
}

/// Tests that a failed chief role creation does not leave a half-created clan.
///
/// Expected: Err(RequestFailed) and the member role is removed again
#[tokio::test]
async fn removes_member_role_when_chief_role_fails() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let gateway = MockGateway::new();
    gateway.reject_role("Chef Beta");
    let service = ClanService::new(db, &gateway);

    let result = service.create_clan(&gateway.actor(1, true), "Beta").await;

    assert!(matches!(result, Err(ClanError::RequestFailed(_))));
    assert!(!gateway.has_role("Membre Beta"));
    assert!(!gateway.has_role("Chef Beta"));
    assert!(logged_kinds(db, "Beta").await.is_empty());
}
