use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DocumentStatus, DocumentType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub vendor_id: i32,
    #[schema(value_type = String)]
    pub doc_type: DocumentType,
    pub file_url: String,
    pub file_name: String,
    #[schema(value_type = String)]
    pub status: DocumentStatus,
    pub remarks: Option<String>,
    pub reviewed_by: Option<i32>,
    pub uploaded_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitDocumentDto {
    #[schema(value_type = String)]
    pub doc_type: DocumentType,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReviewDocumentDto {
    pub approved: bool,
    pub remarks: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    pub url: String,
    pub file_name: String,
    pub size: u64,
}
