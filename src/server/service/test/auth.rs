use super::*;
use crate::server::{
    model::user::RegisterParams,
    service::{admin::code::AdminCodeService, auth::AuthService},
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};

fn registration(email: &str, role: UserRole) -> RegisterParams {
    RegisterParams {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        password: "platform-nine".to_string(),
        phone: None,
        role,
        admin_code: None,
    }
}

/// Tests vendors are approved on registration and can log in.
///
/// Expected: Ok(User) APPROVED with a normalized email, then a successful login
#[tokio::test]
async fn vendor_registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let user = service
        .register(registration("  Asha@Example.com ", UserRole::Vendor))
        .await?;
    assert_eq!(user.email, "asha@example.com");
    assert_eq!(user.status, AccountStatus::Approved);

    let logged_in = service.login("ASHA@example.com", "platform-nine").await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests a wrong password and an unknown email give the same error.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service
        .register(registration("vendor@example.com", UserRole::Vendor))
        .await?;

    let wrong_password = service.login("vendor@example.com", "not-the-one").await;
    let unknown = service.login("nobody@example.com", "platform-nine").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests station managers wait for approval and admins are told.
///
/// Expected: Ok(User) PENDING and a notification for the existing admin
#[tokio::test]
async fn manager_registration_is_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let user = service
        .register(registration("manager@example.com", UserRole::StationManager))
        .await?;

    assert_eq!(user.status, AccountStatus::Pending);
    assert!(inbox(db, admin.id)
        .await
        .iter()
        .any(|n| n.title == "Station manager awaiting approval"));

    // Pending accounts may still log in to see their status
    service.login("manager@example.com", "platform-nine").await?;

    Ok(())
}

/// Tests duplicate emails, short passwords and self-registered inspectors.
///
/// Expected: Err(AppError::Conflict) for the duplicate, Err(AppError::BadRequest) otherwise
#[tokio::test]
async fn register_validation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service
        .register(registration("taken@example.com", UserRole::Vendor))
        .await?;

    let duplicate = service
        .register(registration("TAKEN@example.com", UserRole::Vendor))
        .await;
    let short = service
        .register(RegisterParams {
            password: "short".to_string(),
            ..registration("short@example.com", UserRole::Vendor)
        })
        .await;
    let inspector = service
        .register(registration("inspector@example.com", UserRole::Inspector))
        .await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert!(matches!(short, Err(AppError::BadRequest(_))));
    assert!(matches!(inspector, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the admin code is required and can be used only once.
///
/// Expected: denied without the code, Ok(User) with it, denied on reuse
#[tokio::test]
async fn admin_registration_consumes_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);
    let code = codes.generate().await;

    let without = service
        .register(registration("admin@example.com", UserRole::RailwayAdmin))
        .await;
    assert!(matches!(
        without,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin = service
        .register(RegisterParams {
            admin_code: Some(code.clone()),
            ..registration("admin@example.com", UserRole::RailwayAdmin)
        })
        .await?;
    assert_eq!(admin.role, UserRole::RailwayAdmin);
    assert_eq!(admin.status, AccountStatus::Approved);

    let reused = service
        .register(RegisterParams {
            admin_code: Some(code),
            ..registration("second@example.com", UserRole::RailwayAdmin)
        })
        .await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin registration refused for a taken email keeps the code usable.
///
/// Expected: Err(AppError::Conflict), then Ok(User) with the same code for a free email
#[tokio::test]
async fn duplicate_admin_email_keeps_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service
        .register(registration("taken@example.com", UserRole::Vendor))
        .await?;
    let code = codes.generate().await;

    let duplicate = service
        .register(RegisterParams {
            admin_code: Some(code.clone()),
            ..registration("taken@example.com", UserRole::RailwayAdmin)
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let admin = service
        .register(RegisterParams {
            admin_code: Some(code),
            ..registration("admin@example.com", UserRole::RailwayAdmin)
        })
        .await?;
    assert_eq!(admin.role, UserRole::RailwayAdmin);

    Ok(())
}
