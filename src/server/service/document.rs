//! Vendor document submission and review.

use entity::sea_orm_active_enums::{DocumentStatus, NotificationKind, UserRole};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{document::DocumentRepository, vendor::VendorRepository},
    error::{auth::AuthError, AppError},
    model::{
        document::{doc_type_label, Document, ReviewDocumentParams, SubmitDocumentParams},
        notification::NewNotification,
        user::User,
        vendor::VerificationCheck,
    },
    service::{
        notification,
        vendor::{apply_check, verified_notification},
    },
    util::validate,
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a document for the caller's vendor profile.
    ///
    /// Any earlier pending or rejected document of the same type is replaced.
    ///
    /// # Returns
    /// - `Ok(Document)` - The pending document
    /// - `Err(AppError::BadRequest)` - No vendor profile yet, or invalid file fields
    pub async fn submit(&self, user_id: i32, params: SubmitDocumentParams) -> Result<Document, AppError> {
        let params = SubmitDocumentParams {
            doc_type: params.doc_type,
            file_url: validate::http_url("File URL", &params.file_url)?,
            file_name: validate::required_text("File name", &params.file_name)?,
        };

        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Err(AppError::BadRequest(
                "Create a vendor profile before submitting documents".to_string(),
            ));
        };

        let txn = self.db.begin().await?;
        let repo = DocumentRepository::new(&txn);
        repo.delete_unapproved_of_type(vendor.id, params.doc_type)
            .await?;
        let document = repo.create(vendor.id, params).await?;
        txn.commit().await?;

        Ok(document)
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<Document>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(DocumentRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?)
    }

    /// Lists a vendor's documents for the vendor, a station manager or a railway admin.
    pub async fn get_by_vendor(&self, actor: &User, vendor_id: i32) -> Result<Vec<Document>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_id(vendor_id).await? else {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        };

        let staff = matches!(actor.role, UserRole::StationManager | UserRole::RailwayAdmin);
        if !staff && vendor.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("documents of vendor {}", vendor_id),
            )
            .into());
        }

        Ok(DocumentRepository::new(self.db)
            .get_by_vendor(vendor_id)
            .await?)
    }

    /// Approves or rejects a pending document.
    ///
    /// Approval sets the matching verification check in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Document)` - The reviewed document
    /// - `Err(AppError::NotFound)` - No such document
    /// - `Err(AppError::BadRequest)` - Document was already reviewed
    pub async fn review(
        &self,
        reviewer_id: i32,
        params: ReviewDocumentParams,
    ) -> Result<Document, AppError> {
        let txn = self.db.begin().await?;
        let repo = DocumentRepository::new(&txn);

        let Some(document) = repo.find_by_id(params.document_id).await? else {
            return Err(AppError::NotFound("Document not found".to_string()));
        };
        if document.status != DocumentStatus::Pending {
            return Err(AppError::BadRequest(
                "Document has already been reviewed".to_string(),
            ));
        }

        let status = if params.approved {
            DocumentStatus::Approved
        } else {
            DocumentStatus::Rejected
        };
        let document = repo
            .review(
                document.id,
                status,
                validate::optional_text(params.remarks),
                reviewer_id,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        let Some(vendor) = VendorRepository::new(&txn).find_by_id(document.vendor_id).await? else {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        };
        let vendor_user_id = vendor.user_id;

        let mut notifications = Vec::new();
        if params.approved {
            let check = VerificationCheck::for_document(document.doc_type);
            let (vendor, newly_verified) = apply_check(&txn, vendor, check, true).await?;
            if newly_verified {
                notifications.push(verified_notification(&vendor));
            }
        }

        txn.commit().await?;

        let (kind, title) = if params.approved {
            (NotificationKind::Success, "Document approved")
        } else {
            (NotificationKind::Warning, "Document rejected")
        };
        let mut message = format!("Your {} document was reviewed.", doc_type_label(document.doc_type));
        if let Some(remarks) = &document.remarks {
            message.push_str(&format!(" Remarks: {}", remarks));
        }
        notifications.insert(
            0,
            NewNotification::new(vendor_user_id, kind, title, message).link("/vendor/documents"),
        );
        notification::deliver(self.db, notifications).await;

        Ok(document)
    }
}
