use super::*;

/// Tests counting license numbers by station and year prefix.
///
/// Expected: Ok(1) for the factory prefix and Ok(0) for another station
#[tokio::test]
async fn counts_matching_numbers_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let repo = LicenseRepository::new(db);

    assert!(license.license_number.starts_with("VV-TEST-2026-"));
    assert_eq!(repo.count_with_prefix("VV-TEST-2026-").await?, 1);
    assert_eq!(repo.count_with_prefix("VV-NDLS-2026-").await?, 0);

    Ok(())
}

/// Tests finding a license by its number.
///
/// Expected: Ok(Some(License)) for the issued number, Ok(None) otherwise
#[tokio::test]
async fn finds_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let repo = LicenseRepository::new(db);
    let found = repo.find_by_number(&license.license_number).await?;

    assert_eq!(found.map(|l| l.id), Some(license.id));
    assert!(repo.find_by_number("VV-NONE-2026-000001").await?.is_none());

    Ok(())
}
