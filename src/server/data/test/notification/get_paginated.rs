use super::*;

/// Tests notifications are returned newest first with the total count.
///
/// Expected: Ok with the last created notification first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    for title in ["First", "Second", "Third"] {
        repo.create(info(user.id, title)).await?;
    }

    let (notifications, total) = repo.get_paginated(user.id, false, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].title, "Third");
    assert!(!notifications[0].is_read);

    Ok(())
}

/// Tests filtering to unread notifications and isolation between users.
///
/// Expected: Ok with only the recipient's unread notification
#[tokio::test]
async fn filters_unread_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let read = repo.create(info(user.id, "Read")).await?;
    repo.create(info(user.id, "Unread")).await?;
    repo.create(info(other.id, "Someone else")).await?;
    repo.mark_read(read.id, user.id).await?;

    let (notifications, total) = repo.get_paginated(user.id, true, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(notifications[0].title, "Unread");
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}
