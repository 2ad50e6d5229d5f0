use super::*;

/// Tests loading a layout with its shops ordered by shop number.
///
/// Expected: Ok(Some(Layout)) with shops A-1 then B-1
#[tokio::test]
async fn returns_layout_with_ordered_shops() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;
    factory::layout::ShopFactory::new(db, &layout)
        .shop_number("B-1")
        .position(10.0, 0.0)
        .build()
        .await?;
    factory::layout::ShopFactory::new(db, &layout)
        .shop_number("A-1")
        .build()
        .await?;

    let repo = LayoutRepository::new(db);
    let found = repo.find_by_station(station.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.width, 50.0);
    assert_eq!(found.shops.len(), 2);
    assert_eq!(found.shops[0].shop_number, "A-1");
    assert_eq!(found.shops[1].shop_number, "B-1");

    Ok(())
}

/// Tests a station without a saved layout.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_layout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = LayoutRepository::new(db);
    let found = repo.find_by_station(station.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that saving dimensions twice keeps a single layout row.
///
/// Expected: Ok with the same layout id and the new dimensions
#[tokio::test]
async fn upsert_updates_existing_layout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let repo = LayoutRepository::new(db);
    let first = repo.upsert_layout(station.id, 30.0, 10.0).await?;
    let second = repo.upsert_layout(station.id, 60.0, 25.0).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.width, 60.0);
    assert_eq!(second.height, 25.0);

    Ok(())
}
