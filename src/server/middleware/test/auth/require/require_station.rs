use super::*;

/// Tests the assigned manager may manage their station.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_manage_to_assigned_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, station, _layout, _shop) =
        factory::helpers::create_station_with_shop(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(manager.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ManageStation(station.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a manager of another station is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_manage_to_other_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, station, _layout, _shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (other_manager, _other_station, _layout, _shop) =
        factory::helpers::create_station_with_shop(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(other_manager.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::ManageStation(station.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a railway admin passes every station scoped permission.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_bypasses_station_checks() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;
    let station = factory::create_station(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[
            Permission::ManageStation(station.id),
            Permission::InspectStation(station.id),
            Permission::ViewStation(station.id),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an inspector can inspect and view their station but not manage it.
///
/// Expected: Ok for InspectStation and ViewStation, Err for ManageStation
#[tokio::test]
async fn inspector_scoped_to_assigned_station() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let station = factory::create_station(db).await?;
    let other_station = factory::create_station(db).await?;
    let (inspector, _profile) = factory::inspector::create_inspector(db, station.id).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(inspector.id).await?;

    let auth_guard = AuthGuard::new(db, session);

    assert!(auth_guard
        .require(&[Permission::InspectStation(station.id)])
        .await
        .is_ok());
    assert!(auth_guard
        .require(&[Permission::ViewStation(station.id)])
        .await
        .is_ok());
    assert!(auth_guard
        .require(&[Permission::ManageStation(station.id)])
        .await
        .is_err());
    assert!(auth_guard
        .require(&[Permission::InspectStation(other_station.id)])
        .await
        .is_err());

    Ok(())
}
