use super::*;

/// Tests inserting an account and reading it back by email.
///
/// Expected: Ok with the stored role, status and hash
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: Some("9876543210".to_string()),
            role: UserRole::StationManager,
            status: AccountStatus::Pending,
        })
        .await?;

    let found = repo.find_by_email("asha@example.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, UserRole::StationManager);
    assert_eq!(found.status, AccountStatus::Pending);
    assert_eq!(found.password_hash, "hash");

    Ok(())
}

/// Tests that a second account with the same email is refused.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Other".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: None,
            role: UserRole::Vendor,
            status: AccountStatus::Approved,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that lookups for unknown accounts return None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
