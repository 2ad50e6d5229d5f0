use super::*;

/// Tests creating a shop from a plan computes its area and makes it available.
///
/// Expected: Ok(Shop) with area 20 and status AVAILABLE
#[tokio::test]
async fn creates_available_shop_with_area() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;

    let repo = LayoutRepository::new(db);
    let shop = repo.create_shop(&layout, &plan("P1-01", 0.0)).await?;

    assert_eq!(shop.station_id, station.id);
    assert_eq!(shop.area, 20.0);
    assert_eq!(shop.status, ShopStatus::Available);
    assert!(shop.vendor_id.is_none());

    Ok(())
}

/// Tests that updating a shop's geometry leaves its allocation untouched.
///
/// Expected: Ok(Some(Shop)) still OCCUPIED by the same vendor
#[tokio::test]
async fn update_keeps_status_and_vendor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_verified_vendor(db, user.id).await?;
    let station = factory::create_station(db).await?;
    let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;
    let shop = factory::create_shop(db, &layout).await?;
    let shop = factory::layout::occupy_shop(db, shop, vendor.id).await?;

    let repo = LayoutRepository::new(db);
    let mut moved = plan(&shop.shop_number, 12.0);
    moved.base_rent = 12_500;
    let updated = repo.update_shop(shop.id, &moved).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.x, 12.0);
    assert_eq!(updated.base_rent, 12_500);
    assert_eq!(updated.status, ShopStatus::Occupied);
    assert_eq!(updated.vendor_id, Some(vendor.id));

    Ok(())
}

/// Tests listing and counting shops by status.
///
/// Expected: Ok with one available shop out of two
#[tokio::test]
async fn filters_and_counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;
    let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;
    let available = factory::create_shop(db, &layout).await?;
    factory::layout::ShopFactory::new(db, &layout)
        .position(10.0, 0.0)
        .status(ShopStatus::Occupied)
        .build()
        .await?;

    let repo = LayoutRepository::new(db);
    let shops = repo
        .get_shops_by_status(station.id, ShopStatus::Available)
        .await?;

    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].id, available.id);
    assert_eq!(repo.count_shops(station.id, None).await?, 2);
    assert_eq!(
        repo.count_shops(station.id, Some(ShopStatus::Occupied))
            .await?,
        1
    );

    Ok(())
}

/// Tests freeing an occupied shop.
///
/// Expected: Ok(Some(Shop)) AVAILABLE with no vendor
#[tokio::test]
async fn sets_shop_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_station_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_verified_vendor(db, user.id).await?;
    let station = factory::create_station(db).await?;
    let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;
    let shop = factory::create_shop(db, &layout).await?;
    let shop = factory::layout::occupy_shop(db, shop, vendor.id).await?;

    let repo = LayoutRepository::new(db);
    let freed = repo
        .set_shop_status(shop.id, ShopStatus::Available, None)
        .await?;

    assert!(freed.is_some());
    let freed = freed.unwrap();
    assert_eq!(freed.status, ShopStatus::Available);
    assert!(freed.vendor_id.is_none());

    Ok(())
}
