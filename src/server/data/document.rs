//! Vendor document repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{DocumentStatus, DocumentType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::document::{Document, SubmitDocumentParams};

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending document.
    pub async fn create(
        &self,
        vendor_id: i32,
        param: SubmitDocumentParams,
    ) -> Result<Document, DbErr> {
        let entity = entity::document::ActiveModel {
            vendor_id: ActiveValue::Set(vendor_id),
            doc_type: ActiveValue::Set(param.doc_type),
            file_url: ActiveValue::Set(param.file_url),
            file_name: ActiveValue::Set(param.file_name),
            status: ActiveValue::Set(DocumentStatus::Pending),
            remarks: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            uploaded_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Document::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Document::from_entity))
    }

    /// Lists a vendor's documents, newest first.
    pub async fn get_by_vendor(&self, vendor_id: i32) -> Result<Vec<Document>, DbErr> {
        let entities = entity::prelude::Document::find()
            .filter(entity::document::Column::VendorId.eq(vendor_id))
            .order_by_desc(entity::document::Column::UploadedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Deletes a vendor's pending and rejected documents of one type.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of documents removed
    pub async fn delete_unapproved_of_type(
        &self,
        vendor_id: i32,
        doc_type: DocumentType,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::delete_many()
            .filter(entity::document::Column::VendorId.eq(vendor_id))
            .filter(entity::document::Column::DocType.eq(doc_type))
            .filter(entity::document::Column::Status.ne(DocumentStatus::Approved))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Records a review decision on a document.
    pub async fn review(
        &self,
        id: i32,
        status: DocumentStatus,
        remarks: Option<String>,
        reviewer_id: i32,
    ) -> Result<Option<Document>, DbErr> {
        let Some(entity) = entity::prelude::Document::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.remarks = ActiveValue::Set(remarks);
        active.reviewed_by = ActiveValue::Set(Some(reviewer_id));
        active.reviewed_at = ActiveValue::Set(Some(Utc::now()));
        let entity = active.update(self.db).await?;

        Ok(Some(Document::from_entity(entity)))
    }
}
