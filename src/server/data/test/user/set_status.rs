use super::*;

/// Tests approving a pending account.
///
/// Expected: Ok(Some(User)) with status APPROVED
#[tokio::test]
async fn approves_pending_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::StationManager)
        .status(AccountStatus::Pending)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_status(user.id, AccountStatus::Approved).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().status, AccountStatus::Approved);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.is_approved());

    Ok(())
}

/// Tests setting the status of an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_status(42, AccountStatus::Rejected).await?;

    assert!(result.is_none());

    Ok(())
}
