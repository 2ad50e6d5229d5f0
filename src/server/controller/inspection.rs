use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        inspection::{InspectionDto, LogInspectionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inspection::{Inspection, LogInspectionParams},
        service::inspection::InspectionService,
        state::AppState,
    },
};

/// Tag for grouping inspection endpoints in OpenAPI documentation
pub static INSPECTION_TAG: &str = "inspection";

/// Log an inspection of a license at the inspector's station.
///
/// A `WARNING` or `FAIL` result notifies the vendor and the station manager.
///
/// # Access Control
/// - `Inspector` - Inspector assigned to the license's station
///
/// # Returns
/// - `201 Created` - The logged inspection
/// - `400 Bad Request` - License not active or suspended, rating outside 1-5, or no remarks
/// - `403 Forbidden` - License is at another station
/// - `404 Not Found` - License not found
#[utoipa::path(
    post,
    path = "/api/inspections",
    tag = INSPECTION_TAG,
    request_body = LogInspectionDto,
    responses(
        (status = 201, description = "Inspection logged", body = InspectionDto),
        (status = 400, description = "Invalid inspection", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the station's inspector", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_inspection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LogInspectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Inspector])
        .await?;

    let inspection = InspectionService::new(&state.db)
        .log(&user, LogInspectionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(inspection.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/inspections/mine",
    tag = INSPECTION_TAG,
    responses(
        (status = 200, description = "Inspections logged by the caller", body = Vec<InspectionDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not an inspector", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_inspections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Inspector])
        .await?;

    let inspections: Vec<InspectionDto> = InspectionService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(Inspection::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(inspections)))
}

/// Get the inspections of every license the caller holds.
#[utoipa::path(
    get,
    path = "/api/inspections/vendor",
    tag = INSPECTION_TAG,
    responses(
        (status = 200, description = "Inspections of the caller's licenses", body = Vec<InspectionDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor_inspections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let inspections: Vec<InspectionDto> = InspectionService::new(&state.db)
        .get_for_vendor(user.id)
        .await?
        .into_iter()
        .map(Inspection::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(inspections)))
}
