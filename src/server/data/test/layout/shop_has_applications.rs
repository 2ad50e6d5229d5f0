use super::*;

/// Tests that a shop with an application is reported as having history.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_application_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, shop.id)
        .build()
        .await?;

    let repo = LayoutRepository::new(db);
    let result = repo.shop_has_applications(shop.id).await?;

    assert!(result);

    Ok(())
}

/// Tests a shop nobody applied for.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;

    let repo = LayoutRepository::new(db);
    let result = repo.shop_has_applications(shop.id).await?;

    assert!(!result);

    Ok(())
}
