use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ReasonDto},
        inspection::InspectionDto,
        license::{LicenseDto, LicenseVerificationDto, SuspendLicenseDto},
        payment::PaymentDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{inspection::Inspection, license::License, payment::Payment},
        service::{
            inspection::InspectionService, license::LicenseService, payment::PaymentService,
        },
        state::AppState,
    },
};

/// Tag for grouping license endpoints in OpenAPI documentation
pub static LICENSE_TAG: &str = "license";

#[utoipa::path(
    get,
    path = "/api/licenses/mine",
    tag = LICENSE_TAG,
    responses(
        (status = 200, description = "The caller's licenses", body = Vec<LicenseDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_licenses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let licenses: Vec<LicenseDto> = LicenseService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(License::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(licenses)))
}

/// Get a license with its QR code.
///
/// # Access Control
/// - The holder, staff of the license's station, or the railway admin
#[utoipa::path(
    get,
    path = "/api/licenses/{license_id}",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    responses(
        (status = 200, description = "License details", body = LicenseDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the holder or station staff", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_license(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let license = LicenseService::new(&state.db).get(&user, license_id).await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

/// Verify a license by number.
///
/// Public endpoint behind the license QR code. `valid` is true only for an
/// active license inside its validity window.
#[utoipa::path(
    get,
    path = "/api/verify/{license_number}",
    tag = LICENSE_TAG,
    params(("license_number" = String, Path, description = "License number, e.g. VV-NDLS-2026-000001")),
    responses(
        (status = 200, description = "License holder and validity", body = LicenseVerificationDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_license(
    State(state): State<AppState>,
    Path(license_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let verification = LicenseService::new(&state.db)
        .verify(&license_number)
        .await?;

    Ok((StatusCode::OK, Json(verification.into_dto())))
}

/// Suspend an active license. The holder is notified.
///
/// # Access Control
/// - `ManageStation` - Manager of the license's station, or the railway admin
#[utoipa::path(
    post,
    path = "/api/licenses/{license_id}/suspend",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    request_body = SuspendLicenseDto,
    responses(
        (status = 200, description = "License suspended", body = LicenseDto),
        (status = 400, description = "License is not active", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn suspend_license(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
    Json(payload): Json<SuspendLicenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let license = LicenseService::new(&state.db)
        .suspend(&user, license_id, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/licenses/{license_id}/reinstate",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    responses(
        (status = 200, description = "License reinstated", body = LicenseDto),
        (status = 400, description = "License is not suspended", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reinstate_license(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let license = LicenseService::new(&state.db)
        .reinstate(&user, license_id)
        .await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

/// Revoke a license, freeing its shop and terminating its agreement.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can revoke licenses
///
/// # Returns
/// - `200 OK` - The revoked license
/// - `400 Bad Request` - License already revoked or expired, or no reason
/// - `404 Not Found` - License not found
#[utoipa::path(
    post,
    path = "/api/licenses/{license_id}/revoke",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "License revoked", body = LicenseDto),
        (status = 400, description = "License cannot be revoked", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_license(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
    Json(payload): Json<ReasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let license = LicenseService::new(&state.db)
        .revoke(license_id, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/licenses/{license_id}/inspections",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    responses(
        (status = 200, description = "Inspections of the license", body = Vec<InspectionDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the holder or station staff", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_license_inspections(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let inspections: Vec<InspectionDto> = InspectionService::new(&state.db)
        .get_by_license(&user, license_id)
        .await?
        .into_iter()
        .map(Inspection::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(inspections)))
}

#[utoipa::path(
    get,
    path = "/api/licenses/{license_id}/payments",
    tag = LICENSE_TAG,
    params(("license_id" = i32, Path, description = "License ID")),
    responses(
        (status = 200, description = "Dues of the license", body = Vec<PaymentDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the holder or station staff", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_license_payments(
    State(state): State<AppState>,
    session: Session,
    Path(license_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let payments: Vec<PaymentDto> = PaymentService::new(&state.db)
        .get_by_license(&user, license_id)
        .await?
        .into_iter()
        .map(Payment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(payments)))
}
