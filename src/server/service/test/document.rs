use super::*;
use crate::server::{
    data::vendor::VendorRepository,
    model::document::{ReviewDocumentParams, SubmitDocumentParams},
    service::document::DocumentService,
};
use entity::sea_orm_active_enums::{DocumentStatus, DocumentType, UserRole, VerificationStatus};

const ALL_TYPES: [DocumentType; 7] = [
    DocumentType::IdentityProof,
    DocumentType::BankStatement,
    DocumentType::BusinessRegistration,
    DocumentType::FoodLicense,
    DocumentType::PoliceVerification,
    DocumentType::FinancialStatement,
    DocumentType::RailwayDeclaration,
];

fn upload(doc_type: DocumentType) -> SubmitDocumentParams {
    SubmitDocumentParams {
        doc_type,
        file_url: "https://files.example.com/doc.pdf".to_string(),
        file_name: "doc.pdf".to_string(),
    }
}

fn decision(document_id: i32, approved: bool, remarks: Option<&str>) -> ReviewDocumentParams {
    ReviewDocumentParams {
        document_id,
        approved,
        remarks: remarks.map(str::to_string),
    }
}

/// Tests documents need a vendor profile first.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn submit_requires_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = DocumentService::new(db)
        .submit(user.id, upload(DocumentType::IdentityProof))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resubmitting a type replaces the earlier pending document.
///
/// Expected: Ok with a single pending document of that type
#[tokio::test]
async fn resubmit_replaces_pending_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_vendor(db, user.id).await?;

    let service = DocumentService::new(db);
    service
        .submit(user.id, upload(DocumentType::BankStatement))
        .await?;
    let latest = service
        .submit(user.id, upload(DocumentType::BankStatement))
        .await?;

    let documents = service.get_mine(user.id).await?;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, latest.id);
    assert_eq!(documents[0].status, DocumentStatus::Pending);

    Ok(())
}

/// Tests approving a document sets its verification check.
///
/// Expected: Ok(Document) APPROVED and the vendor IN_PROGRESS with identity checked
#[tokio::test]
async fn approval_sets_matching_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db, user.id).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;

    let service = DocumentService::new(db);
    let document = service
        .submit(user.id, upload(DocumentType::IdentityProof))
        .await?;
    let reviewed = service
        .review(admin.id, decision(document.id, true, None))
        .await?;

    assert_eq!(reviewed.status, DocumentStatus::Approved);

    let vendor = VendorRepository::new(db).find_by_id(vendor.id).await?.unwrap();
    assert!(vendor.checks.identity);
    assert_eq!(vendor.checks.completed(), 1);
    assert_eq!(vendor.verification_status, VerificationStatus::InProgress);

    Ok(())
}

/// Tests approving all seven documents verifies the vendor.
///
/// Expected: Ok with the vendor VERIFIED and a completion notification
#[tokio::test]
async fn seven_approvals_verify_vendor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db, user.id).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;

    let service = DocumentService::new(db);
    for doc_type in ALL_TYPES {
        let document = service.submit(user.id, upload(doc_type)).await?;
        service
            .review(admin.id, decision(document.id, true, None))
            .await?;
    }

    let vendor = VendorRepository::new(db).find_by_id(vendor.id).await?.unwrap();
    assert!(vendor.is_verified());
    assert_eq!(vendor.checks.percentage(), 100);

    let notifications = inbox(db, user.id).await;
    let completions = notifications
        .iter()
        .filter(|n| n.title == "Verification complete")
        .count();
    assert_eq!(completions, 1);

    Ok(())
}

/// Tests a rejection keeps the check unset and tells the vendor why.
///
/// Expected: Ok(Document) REJECTED with remarks in the notification
#[tokio::test]
async fn rejection_notifies_with_remarks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vendor = factory::create_vendor(db, user.id).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;

    let service = DocumentService::new(db);
    let document = service
        .submit(user.id, upload(DocumentType::PoliceVerification))
        .await?;
    let reviewed = service
        .review(admin.id, decision(document.id, false, Some("Scan unreadable")))
        .await?;

    assert_eq!(reviewed.status, DocumentStatus::Rejected);
    let vendor = VendorRepository::new(db).find_by_id(vendor.id).await?.unwrap();
    assert!(!vendor.checks.police);
    assert!(inbox(db, user.id)
        .await
        .iter()
        .any(|n| n.title == "Document rejected" && n.message.contains("Scan unreadable")));

    Ok(())
}

/// Tests a reviewed document cannot be reviewed again.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn review_twice_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vendor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_vendor(db, user.id).await?;
    let admin = factory::user::create_user_with_role(db, UserRole::RailwayAdmin).await?;

    let service = DocumentService::new(db);
    let document = service
        .submit(user.id, upload(DocumentType::FoodLicense))
        .await?;
    service
        .review(admin.id, decision(document.id, true, None))
        .await?;
    let result = service
        .review(admin.id, decision(document.id, false, None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
