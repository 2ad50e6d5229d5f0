use super::*;

/// Tests that a terminal status stamps the decision time and keeps the reason.
///
/// Expected: Ok(Some(Application)) REJECTED with decided_at and reason set
#[tokio::test]
async fn terminal_status_sets_decided_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let application =
        factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, shop.id)
            .build()
            .await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .set_status(
            application.id,
            ApplicationStatus::Rejected,
            Some("Incomplete plan".to_string()),
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, ApplicationStatus::Rejected);
    assert_eq!(updated.rejection_reason.as_deref(), Some("Incomplete plan"));
    assert!(updated.decided_at.is_some());

    Ok(())
}

/// Tests that moving into negotiation is not a decision.
///
/// Expected: Ok(Some(Application)) NEGOTIATING with decided_at unset
#[tokio::test]
async fn negotiating_keeps_decided_at_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let application =
        factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, shop.id)
            .build()
            .await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .set_status(application.id, ApplicationStatus::Negotiating, None)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Negotiating);
    assert!(updated.decided_at.is_none());

    Ok(())
}

/// Tests storing the negotiated rent.
///
/// Expected: Ok(Some(Application)) with final_rent set
#[tokio::test]
async fn stores_final_rent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let application =
        factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, shop.id)
            .build()
            .await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo.set_final_rent(application.id, 11_000).await?.unwrap();

    assert_eq!(updated.final_rent, Some(11_000));

    Ok(())
}
