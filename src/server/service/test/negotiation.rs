use super::*;
use crate::server::{
    model::{application::SubmitApplicationParams, negotiation::PostMessageParams},
    service::{application::ApplicationService, negotiation::NegotiationService},
};
use entity::sea_orm_active_enums::{ApplicationStatus, NegotiationStatus};

/// Creates a station, a verified vendor and an application in negotiation.
///
/// Returns the manager, the vendor user and the application id.
async fn negotiating_application(db: &DatabaseConnection) -> Result<(User, User, i32), AppError> {
    let (manager, station, _layout, shop) =
        factory::helpers::create_station_with_shop(db).await?;
    let (vendor_user, _vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let manager = domain_user(manager);
    let vendor_user = domain_user(vendor_user);

    let service = ApplicationService::new(db);
    let application = service
        .submit(
            vendor_user.id,
            SubmitApplicationParams {
                station_id: station.id,
                shop_id: shop.id,
                proposed_rent: 8_000,
                duration_months: 6,
                business_plan: "Newspaper stand".to_string(),
            },
        )
        .await?;
    service.start_negotiation(&manager, application.id).await?;

    Ok((manager, vendor_user, application.id))
}

fn message(application_id: i32, content: &str, offered_rent: Option<i64>) -> PostMessageParams {
    PostMessageParams {
        application_id,
        content: content.to_string(),
        offered_rent,
    }
}

/// Tests that starting negotiation opens a room between vendor and manager.
///
/// Expected: Ok(NegotiationRoom) OPEN with both participants
#[tokio::test]
async fn start_negotiation_opens_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, vendor_user, application_id) = negotiating_application(db).await?;

    let room = NegotiationService::new(db)
        .get_room(&vendor_user, application_id)
        .await?;

    assert_eq!(room.status, NegotiationStatus::Open);
    assert_eq!(room.vendor_user_id, vendor_user.id);
    assert_eq!(room.manager_user_id, manager.id);
    assert!(room.messages.is_empty());

    Ok(())
}

/// Tests an offer becomes the current offer and the counterpart accepts it.
///
/// Verifies the room is agreed, the application carries the final rent, and
/// the thread records the acceptance.
///
/// Expected: Ok(NegotiationRoom) AGREED at the offered rent
#[tokio::test]
async fn accepting_offer_sets_final_rent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, vendor_user, application_id) = negotiating_application(db).await?;

    let service = NegotiationService::new(db);
    service
        .post_message(
            &manager,
            message(application_id, "Can you do 9000?", Some(9_000)),
        )
        .await?;
    let room = service.accept_offer(&vendor_user, application_id).await?;

    assert_eq!(room.status, NegotiationStatus::Agreed);
    assert_eq!(room.agreed_rent, Some(9_000));
    assert_eq!(room.messages.len(), 2);

    let application = ApplicationService::new(db)
        .get(&vendor_user, application_id)
        .await?;
    assert_eq!(application.final_rent, Some(9_000));
    assert_eq!(application.status, ApplicationStatus::Negotiating);

    assert!(inbox(db, manager.id)
        .await
        .iter()
        .any(|n| n.title == "Offer accepted"));

    Ok(())
}

/// Tests approval uses the agreed rent instead of the proposed rent.
///
/// Expected: Ok(Approval) with a monthly rent of 9000
#[tokio::test]
async fn approval_uses_agreed_rent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, vendor_user, application_id) = negotiating_application(db).await?;

    let service = NegotiationService::new(db);
    service
        .post_message(&vendor_user, message(application_id, "My offer", Some(9_000)))
        .await?;
    service.accept_offer(&manager, application_id).await?;

    let approval = ApplicationService::new(db)
        .approve(&manager, application_id, APP_URL)
        .await?;

    assert_eq!(approval.license.monthly_rent, 9_000);
    assert_eq!(approval.agreement.monthly_rent, 9_000);

    let result = service
        .post_message(&manager, message(application_id, "Welcome aboard", None))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a participant cannot accept their own offer.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn cannot_accept_own_offer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, vendor_user, application_id) = negotiating_application(db).await?;

    let service = NegotiationService::new(db);
    service
        .post_message(&vendor_user, message(application_id, "Offer", Some(7_500)))
        .await?;
    let result = service.accept_offer(&vendor_user, application_id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests accepting when nobody has made an offer.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn cannot_accept_without_offer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _vendor_user, application_id) = negotiating_application(db).await?;

    let service = NegotiationService::new(db);
    let result = service.accept_offer(&manager, application_id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an outsider cannot post to or read a room.
///
/// Expected: Err(AuthError::AccessDenied) for both
#[tokio::test]
async fn outsider_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, _vendor_user, application_id) = negotiating_application(db).await?;
    let outsider = domain_user(factory::create_user(db).await?);

    let service = NegotiationService::new(db);
    let post = service
        .post_message(&outsider, message(application_id, "Hello", None))
        .await;
    let read = service.get_room(&outsider, application_id).await;

    assert!(matches!(
        post,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        read,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests messages are refused once the application is withdrawn.
///
/// Expected: Err(AppError::BadRequest) and the room is CLOSED
#[tokio::test]
async fn withdrawn_application_closes_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, vendor_user, application_id) = negotiating_application(db).await?;
    ApplicationService::new(db)
        .withdraw(vendor_user.id, application_id)
        .await?;

    let service = NegotiationService::new(db);
    let result = service
        .post_message(&manager, message(application_id, "Still there?", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let room = service.get_room(&manager, application_id).await?;
    assert_eq!(room.status, NegotiationStatus::Closed);

    Ok(())
}

/// Tests empty and non-positive offers are rejected before touching the room.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn validates_message_content_and_offer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _vendor_user, application_id) = negotiating_application(db).await?;

    let service = NegotiationService::new(db);
    let empty = service
        .post_message(&manager, message(application_id, "  ", None))
        .await;
    let negative = service
        .post_message(&manager, message(application_id, "Offer", Some(-5)))
        .await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    Ok(())
}
