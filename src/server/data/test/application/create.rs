use super::*;

/// Tests a new application starts pending without a decision.
///
/// Expected: Ok(Application) PENDING with no final rent or decided_at
#[tokio::test]
async fn creates_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(
            vendor.id,
            SubmitApplicationParams {
                station_id: station.id,
                shop_id: shop.id,
                proposed_rent: 9_500,
                duration_months: 24,
                business_plan: "Fresh juice counter".to_string(),
            },
        )
        .await?;

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.proposed_rent, 9_500);
    assert!(application.final_rent.is_none());
    assert!(application.decided_at.is_none());
    assert!(repo.has_active_for_shop(vendor.id, shop.id).await?);

    Ok(())
}

/// Tests that a closed application does not count as active for the shop.
///
/// Expected: Ok(false) after the only application was withdrawn
#[tokio::test]
async fn withdrawn_application_is_not_active() -> Result<(), DbErr> {
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
        .status(ApplicationStatus::Withdrawn)
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let result = repo.has_active_for_shop(vendor.id, shop.id).await?;

    assert!(!result);

    Ok(())
}

/// Tests listing a station's applications filtered by status.
///
/// Expected: Ok with only the negotiating application
#[tokio::test]
async fn lists_station_applications_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_first_user, first) = factory::helpers::create_verified_vendor_user(db).await?;
    let (_second_user, second) = factory::helpers::create_verified_vendor_user(db).await?;
    factory::shop_application::ShopApplicationFactory::new(db, first.id, station.id, shop.id)
        .build()
        .await?;
    let negotiating =
        factory::shop_application::ShopApplicationFactory::new(db, second.id, station.id, shop.id)
            .status(ApplicationStatus::Negotiating)
            .build()
            .await?;

    let repo = ApplicationRepository::new(db);
    let all = repo.get_by_station(station.id, None).await?;
    let filtered = repo
        .get_by_station(station.id, Some(ApplicationStatus::Negotiating))
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, negotiating.id);

    Ok(())
}
