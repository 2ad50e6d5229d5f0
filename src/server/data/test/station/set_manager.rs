use super::*;

/// Tests assigning a manager to a station.
///
/// Expected: Ok(Some(Station)) and the manager resolves to that station
#[tokio::test]
async fn assigns_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::user::create_user_with_role(db, UserRole::StationManager).await?;
    let station = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    let updated = repo.set_manager(station.id, manager.id).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().manager_id, Some(manager.id));

    let managed = repo.find_by_manager(manager.id).await?;
    assert_eq!(managed.map(|s| s.id), Some(station.id));

    Ok(())
}

/// Tests that moving a manager clears their previous station.
///
/// Verifies a manager is assigned to at most one station at a time.
///
/// Expected: Ok with the old station left without a manager
#[tokio::test]
async fn moves_manager_between_stations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::user::create_user_with_role(db, UserRole::StationManager).await?;
    let first = factory::station::StationFactory::new(db)
        .manager_id(manager.id)
        .build()
        .await?;
    let second = factory::create_station(db).await?;

    let repo = StationRepository::new(db);
    repo.set_manager(second.id, manager.id).await?;

    let first = repo.find_by_id(first.id).await?.unwrap();
    assert!(first.manager_id.is_none());

    let managed = repo.find_by_manager(manager.id).await?;
    assert_eq!(managed.map(|s| s.id), Some(second.id));

    Ok(())
}

/// Tests assigning a manager to a missing station.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::user::create_user_with_role(db, UserRole::StationManager).await?;

    let repo = StationRepository::new(db);
    let result = repo.set_manager(999, manager.id).await?;

    assert!(result.is_none());

    Ok(())
}
