use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ReasonDto},
        application::{ApplicationDto, ApprovalDto, SubmitApplicationDto},
    },
    server::{
        controller::station::ApplicationStatusQuery,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::application::{Application, SubmitApplicationParams},
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Apply for an available shop.
///
/// The caller's vendor profile must be verified. The station manager is notified.
///
/// # Access Control
/// - `Vendor` - Only vendors apply for shops
///
/// # Returns
/// - `201 Created` - The pending application
/// - `400 Bad Request` - Profile not verified, invalid fields, or shop not at the station
/// - `404 Not Found` - Shop not found
/// - `409 Conflict` - Shop not available, or an active application for it already exists
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = SubmitApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Invalid application", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 409, description = "Shop unavailable or duplicate application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let application = ApplicationService::new(&state.db)
        .submit(user.id, SubmitApplicationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/applications/mine",
    tag = APPLICATION_TAG,
    params(("status" = Option<String>, Query, description = "Filter by status, e.g. NEGOTIATING")),
    responses(
        (status = 200, description = "The caller's applications", body = Vec<ApplicationDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_applications(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ApplicationStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let applications: Vec<ApplicationDto> = ApplicationService::new(&state.db)
        .get_mine(user.id, query.status)
        .await?
        .into_iter()
        .map(Application::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/{application_id}",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application details", body = ApplicationDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the applicant or station manager", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let application = ApplicationService::new(&state.db)
        .get(&user, application_id)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Withdraw the caller's own pending or negotiating application.
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/withdraw",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application withdrawn", body = ApplicationDto),
        (status = 400, description = "Application already decided", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the applicant", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let application = ApplicationService::new(&state.db)
        .withdraw(user.id, application_id)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Open rent negotiation on a pending application.
///
/// # Access Control
/// - `ManageStation` - Manager of the application's station, or the railway admin
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/negotiate",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Negotiation started", body = ApplicationDto),
        (status = 400, description = "Application is not pending", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_negotiation(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let application = ApplicationService::new(&state.db)
        .start_negotiation(&user, application_id)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/reject",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    request_body = ReasonDto,
    responses(
        (status = 200, description = "Application rejected", body = ApplicationDto),
        (status = 400, description = "Application already decided or no reason", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    Json(payload): Json<ReasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let application = ApplicationService::new(&state.db)
        .reject(&user, application_id, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Approve an application and allocate the shop.
///
/// In one transaction the shop is occupied, competing applications are rejected,
/// and the license, agreement, security deposit and first month's rent are created.
///
/// # Access Control
/// - `ManageStation` - Manager of the application's station, or the railway admin
///
/// # Returns
/// - `200 OK` - The approved application with everything it created
/// - `400 Bad Request` - Application already decided
/// - `404 Not Found` - Application not found
/// - `409 Conflict` - Shop is no longer available
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/approve",
    tag = APPLICATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application approved", body = ApprovalDto),
        (status = 400, description = "Application already decided", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Shop no longer available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let approval = ApplicationService::new(&state.db)
        .approve(&user, application_id, &state.app_url)
        .await?;

    Ok((StatusCode::OK, Json(approval.into_dto())))
}
