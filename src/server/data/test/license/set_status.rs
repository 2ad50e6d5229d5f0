use super::*;

/// Tests suspending a license with a reason.
///
/// Expected: Ok(Some(License)) SUSPENDED with the reason recorded
#[tokio::test]
async fn records_reason_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let repo = LicenseRepository::new(db);
    let updated = repo
        .set_status(
            license.id,
            LicenseStatus::Suspended,
            Some("Unpaid rent".to_string()),
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, LicenseStatus::Suspended);
    assert_eq!(updated.revocation_reason.as_deref(), Some("Unpaid rent"));

    Ok(())
}

/// Tests counting active licenses per station.
///
/// Expected: Ok(1) before suspension and Ok(0) after
#[tokio::test]
async fn count_active_follows_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _shop, _user, vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let repo = LicenseRepository::new(db);
    assert_eq!(repo.count_active(Some(station.id), None).await?, 1);
    assert_eq!(repo.count_active(None, Some(vendor.id)).await?, 1);

    repo.set_status(license.id, LicenseStatus::Suspended, None)
        .await?;

    assert_eq!(repo.count_active(Some(station.id), None).await?, 0);

    Ok(())
}
