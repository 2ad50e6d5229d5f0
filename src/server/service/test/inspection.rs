use super::*;
use crate::server::{model::inspection::LogInspectionParams, service::inspection::InspectionService};
use entity::sea_orm_active_enums::{InspectionResult, LicenseStatus};

fn report(license_id: i32, result: InspectionResult, hygiene_rating: i32) -> LogInspectionParams {
    LogInspectionParams {
        license_id,
        result,
        hygiene_rating,
        remarks: "Routine visit".to_string(),
        violations: None,
    }
}

/// Tests a passing inspection is stored without notifying anyone.
///
/// Expected: Ok(Inspection) and no notifications for the vendor
#[tokio::test]
async fn pass_is_logged_quietly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _shop, vendor_user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let (inspector_user, inspector) = factory::inspector::create_inspector(db, station.id).await?;

    let inspection = InspectionService::new(db)
        .log(
            &domain_user(inspector_user),
            report(license.id, InspectionResult::Pass, 5),
        )
        .await?;

    assert_eq!(inspection.inspector_id, inspector.id);
    assert_eq!(inspection.station_id, station.id);
    assert_eq!(inspection.hygiene_rating, 5);
    assert!(inbox(db, vendor_user.id).await.is_empty());

    Ok(())
}

/// Tests a failed inspection alerts the vendor and the station manager.
///
/// Expected: Ok(Inspection) and an "Inspection failed" notification for both
#[tokio::test]
async fn fail_notifies_vendor_and_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, station, _shop, vendor_user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let (inspector_user, _inspector) = factory::inspector::create_inspector(db, station.id).await?;

    InspectionService::new(db)
        .log(
            &domain_user(inspector_user),
            LogInspectionParams {
                violations: Some("Open food containers".to_string()),
                ..report(license.id, InspectionResult::Fail, 1)
            },
        )
        .await?;

    for user_id in [vendor_user.id, manager.id] {
        let notifications = inbox(db, user_id).await;
        assert!(notifications
            .iter()
            .any(|n| n.title == "Inspection failed" && n.message.contains("1/5")));
    }

    Ok(())
}

/// Tests inspectors are limited to licenses at their own station.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn other_station_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _station, _shop, _vendor_user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let elsewhere = factory::create_station(db).await?;
    let (inspector_user, _inspector) = factory::inspector::create_inspector(db, elsewhere.id).await?;

    let result = InspectionService::new(db)
        .log(
            &domain_user(inspector_user),
            report(license.id, InspectionResult::Pass, 4),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a user without an inspector profile cannot log inspections.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_inspector_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _station, _shop, _vendor_user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;

    let result = InspectionService::new(db)
        .log(
            &domain_user(manager),
            report(license.id, InspectionResult::Pass, 4),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests hygiene ratings outside 1 to 5 are refused.
///
/// Expected: Err(AppError::BadRequest) for 0 and 6
#[tokio::test]
async fn rating_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _shop, _vendor_user, _vendor, license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let (inspector_user, _inspector) = factory::inspector::create_inspector(db, station.id).await?;
    let inspector_user = domain_user(inspector_user);
    let service = InspectionService::new(db);

    for rating in [0, 6] {
        let result = service
            .log(
                &inspector_user,
                report(license.id, InspectionResult::Warning, rating),
            )
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests expired and revoked licenses cannot be inspected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn closed_license_is_refused() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, shop, _vendor_user, vendor, _license) =
        factory::helpers::create_license_with_dependencies(db).await?;
    let application =
        factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, shop.id)
            .build()
            .await?;
    let revoked = factory::license::LicenseFactory::new(db, &application)
        .status(LicenseStatus::Revoked)
        .build()
        .await?;
    let (inspector_user, _inspector) = factory::inspector::create_inspector(db, station.id).await?;

    let result = InspectionService::new(db)
        .log(
            &domain_user(inspector_user),
            report(revoked.id, InspectionResult::Pass, 3),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
