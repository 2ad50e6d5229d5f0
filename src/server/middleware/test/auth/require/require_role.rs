use super::*;

/// Tests each role passes its own role permission.
///
/// Expected: Ok(User) for every role
#[tokio::test]
async fn grants_matching_role() -> Result<(), AppError> {
    for (role, permission) in [
        (UserRole::Vendor, Permission::Vendor),
        (UserRole::StationManager, Permission::StationManager),
        (UserRole::Inspector, Permission::Inspector),
        (UserRole::RailwayAdmin, Permission::RailwayAdmin),
    ] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user_with_role(db, role).await?;

        let auth_session = AuthSession::new(session);
        auth_session.set_user_id(user.id).await?;

        let auth_guard = AuthGuard::new(db, session);
        let result = auth_guard.require(&[permission]).await;

        assert!(result.is_ok(), "{:?} should pass {:?}", role, permission);
        assert_eq!(result.unwrap().role, role);
    }

    Ok(())
}

/// Tests a vendor is denied the railway admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the vendor
#[tokio::test]
async fn denies_admin_to_vendor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::RailwayAdmin]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("RailwayAdmin"));
        }
        e => panic!("Expected AccessDenied, got: {:?}", e),
    }

    Ok(())
}

/// Tests the staff permission covers managers and admins only.
///
/// Expected: Ok for manager and admin, Err for inspector
#[tokio::test]
async fn staff_covers_manager_and_admin() -> Result<(), AppError> {
    for (role, allowed) in [
        (UserRole::StationManager, true),
        (UserRole::RailwayAdmin, true),
        (UserRole::Inspector, false),
        (UserRole::Vendor, false),
    ] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user_with_role(db, role).await?;

        let auth_session = AuthSession::new(session);
        auth_session.set_user_id(user.id).await?;

        let auth_guard = AuthGuard::new(db, session);
        let result = auth_guard.require(&[Permission::Staff]).await;

        assert_eq!(result.is_ok(), allowed, "{:?}", role);
    }

    Ok(())
}
