use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::VerificationStatus;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ReasonDto},
        document::DocumentDto,
        payment::PaymentSummaryDto,
        vendor::{SetCheckDto, VendorDto, VendorProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            document::Document,
            vendor::{Vendor, VendorProfileParams, VerificationCheck},
        },
        service::{document::DocumentService, payment::PaymentService, vendor::VendorService},
        state::AppState,
    },
};

/// Tag for grouping vendor endpoints in OpenAPI documentation
pub static VENDOR_TAG: &str = "vendor";

#[derive(Deserialize)]
pub struct VendorStatusQuery {
    pub status: Option<VerificationStatus>,
}

/// Create the caller's vendor profile.
///
/// PAN (10) and IFSC (11) codes are checked for length and stored uppercase.
///
/// # Access Control
/// - `Vendor` - Only vendor accounts have a profile
///
/// # Returns
/// - `201 Created` - The new profile
/// - `400 Bad Request` - Invalid profile data
/// - `409 Conflict` - The caller already has a profile
#[utoipa::path(
    post,
    path = "/api/vendors/me",
    tag = VENDOR_TAG,
    request_body = VendorProfileDto,
    responses(
        (status = 201, description = "Profile created", body = VendorDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 409, description = "Profile already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VendorProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let vendor = VendorService::new(&state.db)
        .create_profile(user.id, VendorProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vendor.into_dto())))
}

/// Update the caller's vendor profile while it is not yet verified.
#[utoipa::path(
    put,
    path = "/api/vendors/me",
    tag = VENDOR_TAG,
    request_body = VendorProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = VendorDto),
        (status = 400, description = "Invalid data or profile already verified", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VendorProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let vendor = VendorService::new(&state.db)
        .update_profile(user.id, VendorProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(vendor.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/vendors/me",
    tag = VENDOR_TAG,
    responses(
        (status = 200, description = "The caller's profile with verification summary", body = VendorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let vendor = VendorService::new(&state.db).get_mine(user.id).await?;

    Ok((StatusCode::OK, Json(vendor.into_dto())))
}

/// Get vendors, optionally filtered by verification status.
///
/// # Access Control
/// - `Staff` - Station managers and the railway admin
#[utoipa::path(
    get,
    path = "/api/vendors",
    tag = VENDOR_TAG,
    params(("status" = Option<String>, Query, description = "Filter by status, e.g. IN_PROGRESS")),
    responses(
        (status = 200, description = "Vendors", body = Vec<VendorDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendors(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<VendorStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let vendors: Vec<VendorDto> = VendorService::new(&state.db)
        .get_all(query.status)
        .await?
        .into_iter()
        .map(Vendor::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(vendors)))
}

#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}",
    tag = VENDOR_TAG,
    params(("vendor_id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor profile", body = VendorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the vendor or staff", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    session: Session,
    Path(vendor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let vendor = VendorService::new(&state.db).get(&user, vendor_id).await?;

    Ok((StatusCode::OK, Json(vendor.into_dto())))
}

/// Set one verification check of a vendor.
///
/// The vendor's status is recomputed from the seven checks unless the vendor
/// was rejected. The vendor is notified on becoming verified.
///
/// # Access Control
/// - `Staff` - Station managers and the railway admin
#[utoipa::path(
    put,
    path = "/api/vendors/{vendor_id}/checks",
    tag = VENDOR_TAG,
    params(("vendor_id" = i32, Path, description = "Vendor ID")),
    request_body = SetCheckDto,
    responses(
        (status = 200, description = "Check updated", body = VendorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_check(
    State(state): State<AppState>,
    session: Session,
    Path(vendor_id): Path<i32>,
    Json(payload): Json<SetCheckDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let vendor = VendorService::new(&state.db)
        .set_check(vendor_id, VerificationCheck::from_dto(payload.check), payload.value)
        .await?;

    Ok((StatusCode::OK, Json(vendor.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/vendors/{vendor_id}/reject",
    tag = VENDOR_TAG,
    params(("vendor_id" = i32, Path, description = "Vendor ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "Vendor rejected", body = VendorDto),
        (status = 400, description = "Reason missing", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_vendor(
    State(state): State<AppState>,
    session: Session,
    Path(vendor_id): Path<i32>,
    Json(payload): Json<ReasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let vendor = VendorService::new(&state.db)
        .reject(vendor_id, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(vendor.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}/documents",
    tag = VENDOR_TAG,
    params(("vendor_id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Documents of the vendor", body = Vec<DocumentDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the vendor or staff", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor_documents(
    State(state): State<AppState>,
    session: Session,
    Path(vendor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let documents: Vec<DocumentDto> = DocumentService::new(&state.db)
        .get_by_vendor(&user, vendor_id)
        .await?
        .into_iter()
        .map(Document::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(documents)))
}

/// Get the payment totals of a vendor.
///
/// # Access Control
/// - `Staff` - Station managers and the railway admin
#[utoipa::path(
    get,
    path = "/api/vendors/{vendor_id}/payments/summary",
    tag = VENDOR_TAG,
    params(("vendor_id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Paid, outstanding and overdue totals", body = PaymentSummaryDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor_payment_summary(
    State(state): State<AppState>,
    session: Session,
    Path(vendor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let summary = PaymentService::new(&state.db).summary(vendor_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
