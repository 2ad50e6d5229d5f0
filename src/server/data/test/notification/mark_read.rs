use super::*;

/// Tests marking a notification read by its recipient.
///
/// Expected: Ok(Some(Notification)) with is_read true
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(info(user.id, "Hello")).await?;
    let updated = repo.mark_read(notification.id, user.id).await?;

    assert!(updated.is_some());
    assert!(updated.unwrap().is_read);

    Ok(())
}

/// Tests that another user's notification cannot be marked read.
///
/// Expected: Ok(None) and the notification stays unread
#[tokio::test]
async fn ignores_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(info(owner.id, "Private")).await?;
    let result = repo.mark_read(notification.id, intruder.id).await?;

    assert!(result.is_none());
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}

/// Tests marking everything read reports how many changed.
///
/// Expected: Ok(2) on the first call and Ok(0) on the second
#[tokio::test]
async fn mark_all_read_counts_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(info(user.id, "One")).await?;
    repo.create(info(user.id, "Two")).await?;

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.mark_all_read(user.id).await?, 0);
    assert_eq!(repo.count_unread(user.id).await?, 0);

    Ok(())
}
