use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        document::{DocumentDto, ReviewDocumentDto, SubmitDocumentDto, UploadedFileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::document::{Document, ReviewDocumentParams, SubmitDocumentParams, UploadFile},
        service::{document::DocumentService, upload::UploadService},
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Multipart body of a document upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Upload a document file to the hosted file service.
///
/// The returned URL is then submitted with `POST /api/documents`.
///
/// # Access Control
/// - `Vendor` - Only vendors upload documents
///
/// # Returns
/// - `201 Created` - Where the file is hosted
/// - `400 Bad Request` - No `file` field, empty or oversized file, or uploads not configured
/// - `500 Internal Server Error` - File service failed
#[utoipa::path(
    post,
    path = "/api/documents/upload",
    tag = DOCUMENT_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = UploadedFileDto),
        (status = 400, description = "Missing, empty or oversized file", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?.to_vec();
        file = Some(UploadFile {
            file_name,
            content_type,
            bytes,
        });
        break;
    }
    let Some(file) = file else {
        return Err(AppError::BadRequest("Form field 'file' is required".to_string()));
    };

    let uploaded = UploadService::new(&state.http_client, &state.upload)
        .upload(file)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadedFileDto {
            url: uploaded.url,
            file_name: uploaded.file_name,
            size: uploaded.size,
        }),
    ))
}

/// Submit a document for verification.
///
/// Replaces any earlier pending or rejected document of the same type.
///
/// # Access Control
/// - `Vendor` - Only vendors with a profile submit documents
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = SubmitDocumentDto,
    responses(
        (status = 201, description = "Document submitted", body = DocumentDto),
        (status = 400, description = "No profile or invalid file fields", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_document(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let document = DocumentService::new(&state.db)
        .submit(user.id, SubmitDocumentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/documents/mine",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "The caller's documents", body = Vec<DocumentDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let documents: Vec<DocumentDto> = DocumentService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(Document::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(documents)))
}

/// Approve or reject a pending document.
///
/// Approval sets the vendor's matching verification check.
///
/// # Access Control
/// - `Staff` - Station managers and the railway admin
///
/// # Returns
/// - `200 OK` - The reviewed document
/// - `400 Bad Request` - Document was already reviewed
/// - `404 Not Found` - Document not found
#[utoipa::path(
    post,
    path = "/api/documents/{document_id}/review",
    tag = DOCUMENT_TAG,
    params(("document_id" = i32, Path, description = "Document ID")),
    request_body = ReviewDocumentDto,
    responses(
        (status = 200, description = "Document reviewed", body = DocumentDto),
        (status = 400, description = "Document already reviewed", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_document(
    State(state): State<AppState>,
    session: Session,
    Path(document_id): Path<i32>,
    Json(payload): Json<ReviewDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = ReviewDocumentParams {
        document_id,
        approved: payload.approved,
        remarks: payload.remarks,
    };
    let document = DocumentService::new(&state.db).review(user.id, params).await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}
