use super::*;

/// Tests settling a due with a transaction reference.
///
/// Expected: Ok(Some(Payment)) PAID with paid_at and the reference
#[tokio::test]
async fn marks_due_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let due = repo.create(rent_due(&license, Utc::now())).await?;
    assert_eq!(due.status, PaymentStatus::Pending);

    let paid = repo.mark_paid(due.id, "UPI-778899".to_string()).await?;

    assert!(paid.is_some());
    let paid = paid.unwrap();
    assert_eq!(paid.status, PaymentStatus::Paid);
    assert!(paid.paid_at.is_some());
    assert_eq!(paid.transaction_ref.as_deref(), Some("UPI-778899"));

    Ok(())
}

/// Tests listing dues through the station of their license.
///
/// Expected: Ok with the license's dues for its station, none for another
#[tokio::test]
async fn lists_dues_by_station() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _shop, _user, vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let other_station = factory::create_station(db).await?;

    let repo = PaymentRepository::new(db);
    repo.create(rent_due(&license, Utc::now())).await?;
    repo.create(rent_due(&license, Utc::now() + Duration::days(30)))
        .await?;

    assert_eq!(repo.get_by_station(station.id).await?.len(), 2);
    assert!(repo.get_by_station(other_station.id).await?.is_empty());
    assert_eq!(repo.get_by_vendor(vendor.id).await?.len(), 2);

    Ok(())
}
