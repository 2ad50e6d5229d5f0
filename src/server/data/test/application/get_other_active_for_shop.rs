use super::*;

/// Tests finding the competing open applications for a shop.
///
/// Verifies the excluded application and closed applications are left out.
///
/// Expected: Ok with the pending and negotiating competitors only
#[tokio::test]
async fn returns_only_other_open_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;

    let mut vendors = Vec::new();
    for _ in 0..4 {
        let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
        vendors.push(vendor);
    }

    let chosen =
        factory::shop_application::ShopApplicationFactory::new(db, vendors[0].id, station.id, shop.id)
            .build()
            .await?;
    let pending =
        factory::shop_application::ShopApplicationFactory::new(db, vendors[1].id, station.id, shop.id)
            .build()
            .await?;
    let negotiating =
        factory::shop_application::ShopApplicationFactory::new(db, vendors[2].id, station.id, shop.id)
            .status(ApplicationStatus::Negotiating)
            .build()
            .await?;
    factory::shop_application::ShopApplicationFactory::new(db, vendors[3].id, station.id, shop.id)
        .status(ApplicationStatus::Withdrawn)
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let others = repo.get_other_active_for_shop(shop.id, chosen.id).await?;

    let mut ids: Vec<i32> = others.iter().map(|a| a.id).collect();
    ids.sort();
    assert_eq!(ids, vec![pending.id, negotiating.id]);

    Ok(())
}
