use super::*;

/// Tests creating a station and finding it by code.
///
/// Expected: Ok with the station stored without a manager
#[tokio::test]
async fn creates_station_without_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo
        .create(CreateStationParams {
            name: "New Delhi".to_string(),
            code: "NDLS".to_string(),
            zone: "Northern".to_string(),
            city: "Delhi".to_string(),
            platform_count: 16,
        })
        .await?;

    let found = repo.find_by_code("NDLS").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, station.id);
    assert_eq!(found.platform_count, 16);
    assert!(found.manager_id.is_none());

    Ok(())
}

/// Tests that station codes are unique.
///
/// Expected: Err(DbErr) for the second station
#[tokio::test]
async fn fails_for_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::station::StationFactory::new(db)
        .code("CSMT")
        .build()
        .await?;

    let repo = StationRepository::new(db);
    let result = repo
        .create(CreateStationParams {
            name: "Another".to_string(),
            code: "CSMT".to_string(),
            zone: "Central".to_string(),
            city: "Mumbai".to_string(),
            platform_count: 2,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests stations are listed by name across pages.
///
/// Expected: Ok with names in ascending order and total of 3
#[tokio::test]
async fn lists_stations_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Station)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Pune", "Agra", "Howrah"] {
        factory::station::StationFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = StationRepository::new(db);
    let (stations, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].name, "Agra");
    assert_eq!(stations[1].name, "Howrah");

    Ok(())
}
