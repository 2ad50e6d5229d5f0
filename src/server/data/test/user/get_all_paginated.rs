use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested page and the total number
/// of matching accounts.
///
/// Expected: Ok with 2 users per page and a total of 5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(UserFilter::default(), 0, 2)
        .await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (users, _) = repo
        .get_all_paginated(UserFilter::default(), 2, 2)
        .await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests filtering the listing by role and status.
///
/// Expected: Ok with only the pending station manager
#[tokio::test]
async fn filters_by_role_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::user::UserFactory::new(db)
        .role(UserRole::StationManager)
        .status(AccountStatus::Pending)
        .build()
        .await?;
    factory::user::create_user_with_role(db, UserRole::StationManager).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(
            UserFilter {
                role: Some(UserRole::StationManager),
                status: Some(AccountStatus::Pending),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, pending.id);

    Ok(())
}

/// Tests pagination with empty database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(UserFilter::default(), 0, 10)
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
