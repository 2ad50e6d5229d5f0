//! Vendor document domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DocumentStatus, DocumentType};

use crate::model::document::{DocumentDto, SubmitDocumentDto};

/// Largest file accepted by the upload proxy.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub vendor_id: i32,
    pub doc_type: DocumentType,
    pub file_url: String,
    pub file_name: String,
    pub status: DocumentStatus,
    pub remarks: Option<String>,
    pub reviewed_by: Option<i32>,
    pub uploaded_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            doc_type: entity.doc_type,
            file_url: entity.file_url,
            file_name: entity.file_name,
            status: entity.status,
            remarks: entity.remarks,
            reviewed_by: entity.reviewed_by,
            uploaded_at: entity.uploaded_at,
            reviewed_at: entity.reviewed_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            vendor_id: self.vendor_id,
            doc_type: self.doc_type,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status,
            remarks: self.remarks,
            reviewed_by: self.reviewed_by,
            uploaded_at: self.uploaded_at,
            reviewed_at: self.reviewed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitDocumentParams {
    pub doc_type: DocumentType,
    pub file_url: String,
    pub file_name: String,
}

impl SubmitDocumentParams {
    pub fn from_dto(dto: SubmitDocumentDto) -> Self {
        Self {
            doc_type: dto.doc_type,
            file_url: dto.file_url,
            file_name: dto.file_name,
        }
    }
}

/// Human readable name of a document type, used in notifications.
pub fn doc_type_label(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::IdentityProof => "identity proof",
        DocumentType::BankStatement => "bank statement",
        DocumentType::BusinessRegistration => "business registration",
        DocumentType::FoodLicense => "food license",
        DocumentType::PoliceVerification => "police verification",
        DocumentType::FinancialStatement => "financial statement",
        DocumentType::RailwayDeclaration => "railway declaration",
    }
}

/// Decision on a pending document.
#[derive(Debug, Clone)]
pub struct ReviewDocumentParams {
    pub document_id: i32,
    pub approved: bool,
    pub remarks: Option<String>,
}

/// File received by the upload proxy.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// File stored at the hosted file service.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub url: String,
    pub file_name: String,
    pub size: u64,
}
