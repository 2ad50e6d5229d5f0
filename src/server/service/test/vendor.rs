use super::*;
use crate::server::{
    model::vendor::{VendorProfileParams, VerificationCheck},
    service::vendor::VendorService,
};
use entity::sea_orm_active_enums::VerificationStatus;

fn profile() -> VendorProfileParams {
    VendorProfileParams {
        business_name: "Chai Point".to_string(),
        business_type: "Beverages".to_string(),
        owner_name: "Asha Rao".to_string(),
        pan_number: "abcde1234f".to_string(),
        gst_number: Some("27abcde1234f1z5".to_string()),
        bank_account_number: "001234567890".to_string(),
        ifsc_code: "sbin0001234".to_string(),
        food_license_number: None,
        annual_turnover: 1_200_000,
        railway_declaration: true,
    }
}

const ALL_CHECKS: [VerificationCheck; 7] = [
    VerificationCheck::Identity,
    VerificationCheck::Bank,
    VerificationCheck::Business,
    VerificationCheck::FoodLicense,
    VerificationCheck::Police,
    VerificationCheck::Financial,
    VerificationCheck::RailwayDeclaration,
];

/// Tests a profile is created once with normalized identifiers.
///
/// Expected: Ok(Vendor) PENDING with uppercased PAN and IFSC, then Err(AppError::Conflict)
#[tokio::test]
async fn create_profile_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = VendorService::new(db);

    let vendor = service.create_profile(user.id, profile()).await?;
    assert_eq!(vendor.pan_number, "ABCDE1234F");
    assert_eq!(vendor.ifsc_code, "SBIN0001234");
    assert_eq!(vendor.verification_status, VerificationStatus::Pending);

    let again = service.create_profile(user.id, profile()).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests malformed PAN numbers and negative turnover are refused.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn create_profile_validates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = VendorService::new(db);

    let pan = service
        .create_profile(
            user.id,
            VendorProfileParams {
                pan_number: "ABC".to_string(),
                ..profile()
            },
        )
        .await;
    let turnover = service
        .create_profile(
            user.id,
            VendorProfileParams {
                annual_turnover: -1,
                ..profile()
            },
        )
        .await;

    assert!(matches!(pan, Err(AppError::BadRequest(_))));
    assert!(matches!(turnover, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests setting all checks verifies the vendor once and freezes the profile.
///
/// Expected: VERIFIED after seven checks, one notification, and Err(AppError::BadRequest) on edit
#[tokio::test]
async fn checks_verify_and_freeze_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = VendorService::new(db);
    let vendor = service.create_profile(user.id, profile()).await?;

    let mut latest = vendor;
    for check in ALL_CHECKS {
        latest = service.set_check(latest.id, check, true).await?;
    }
    // Setting an already set check does not verify the vendor a second time
    latest = service
        .set_check(latest.id, VerificationCheck::Identity, true)
        .await?;

    assert!(latest.is_verified());
    let completions = inbox(db, user.id)
        .await
        .iter()
        .filter(|n| n.title == "Verification complete")
        .count();
    assert_eq!(completions, 1);

    let edit = service.update_profile(user.id, profile()).await;
    assert!(matches!(edit, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests unsetting a check moves a verified vendor back to in progress.
///
/// Expected: Ok(Vendor) IN_PROGRESS with six checks
#[tokio::test]
async fn unsetting_check_revokes_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;

    let vendor = VendorService::new(db)
        .set_check(vendor.id, VerificationCheck::Police, false)
        .await?;

    assert_eq!(vendor.verification_status, VerificationStatus::InProgress);
    assert_eq!(vendor.checks.completed(), 6);

    Ok(())
}

/// Tests a rejected vendor stays rejected when checks change.
///
/// Expected: Ok(Vendor) REJECTED with the reason kept
#[tokio::test]
async fn rejection_is_sticky() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = VendorService::new(db);
    let vendor = service.create_profile(user.id, profile()).await?;

    service.reject(vendor.id, "Forged bank statement").await?;
    let vendor = service
        .set_check(vendor.id, VerificationCheck::Bank, true)
        .await?;

    assert_eq!(vendor.verification_status, VerificationStatus::Rejected);
    assert_eq!(
        vendor.rejection_reason.as_deref(),
        Some("Forged bank statement")
    );
    assert!(inbox(db, user.id)
        .await
        .iter()
        .any(|n| n.title == "Verification rejected"));

    Ok(())
}

/// Tests staff may view any profile while vendors only see their own.
///
/// Expected: Ok for the owner and a manager, Err(AuthError::AccessDenied) for another vendor
#[tokio::test]
async fn get_respects_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db, owner.id).await?;
    let other = factory::create_user(db).await?;
    let manager = factory::user::create_user_with_role(
        db,
        entity::sea_orm_active_enums::UserRole::StationManager,
    )
    .await?;
    let service = VendorService::new(db);

    service.get(&domain_user(owner), vendor.id).await?;
    service.get(&domain_user(manager), vendor.id).await?;
    let denied = service.get(&domain_user(other), vendor.id).await;

    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
