use super::*;

/// Tests flagging pending dues whose due date has passed.
///
/// Verifies that future dues and paid dues are left alone and that only the
/// newly flagged dues are returned.
///
/// Expected: Ok with the single past pending due, now OVERDUE
#[tokio::test]
async fn flags_only_past_pending_dues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let now = Utc::now();

    let repo = PaymentRepository::new(db);
    let late = repo.create(rent_due(&license, now - Duration::days(3))).await?;
    repo.create(rent_due(&license, now + Duration::days(3)))
        .await?;
    let settled = repo.create(rent_due(&license, now - Duration::days(40))).await?;
    repo.mark_paid(settled.id, "TXN-1".to_string()).await?;

    let flagged = repo.mark_overdue(now).await?;

    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, late.id);
    assert_eq!(flagged[0].status, PaymentStatus::Overdue);

    let again = repo.mark_overdue(now).await?;
    assert!(again.is_empty());

    Ok(())
}

/// Tests that a sweep with nothing due changes nothing.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_nothing_due() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_licensing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let flagged = repo.mark_overdue(Utc::now()).await?;

    assert!(flagged.is_empty());

    Ok(())
}
