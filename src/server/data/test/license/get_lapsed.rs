use super::*;

/// Tests selecting active and suspended licenses past their validity.
///
/// Verifies that licenses still in their window and licenses already revoked
/// are not selected.
///
/// Expected: Ok with the lapsed active and lapsed suspended licenses
#[tokio::test]
async fn returns_lapsed_active_and_suspended() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let past = (now - Duration::days(400), now - Duration::days(35));

    let mut created = Vec::new();
    for (status, validity) in [
        (LicenseStatus::Active, past),
        (LicenseStatus::Suspended, past),
        (LicenseStatus::Revoked, past),
        (LicenseStatus::Active, (now, now + Duration::days(30))),
    ] {
        let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
        let station = factory::create_station(db).await?;
        let layout = factory::create_layout(db, station.id, 50.0, 20.0).await?;
        let shop = factory::create_shop(db, &layout).await?;
        let application = factory::shop_application::ShopApplicationFactory::new(
            db,
            vendor.id,
            station.id,
            shop.id,
        )
        .status(ApplicationStatus::Approved)
        .build()
        .await?;
        let license = factory::license::LicenseFactory::new(db, &application)
            .status(status)
            .validity(validity.0, validity.1)
            .build()
            .await?;
        created.push(license);
    }

    let repo = LicenseRepository::new(db);
    let lapsed = repo.get_lapsed(now).await?;

    let mut ids: Vec<i32> = lapsed.iter().map(|l| l.id).collect();
    ids.sort();
    assert_eq!(ids, vec![created[0].id, created[1].id]);

    Ok(())
}
