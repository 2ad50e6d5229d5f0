use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateInspectorDto, InspectorDto, PaginatedUsersDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateInspectorParams, Inspector, UserFilter},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    pub role: Option<UserRole>,
    pub status: Option<AccountStatus>,
}

/// Get a page of user accounts.
///
/// Returns accounts newest first, optionally filtered by role and approval status.
/// Used by the railway admin to find station managers awaiting approval.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can list accounts
///
/// # Returns
/// - `200 OK` - Paginated list of accounts
/// - `401 Unauthorized` - User not signed in
/// - `403 Forbidden` - User is not the railway admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("role" = Option<String>, Query, description = "Filter by role, e.g. STATION_MANAGER"),
        ("status" = Option<String>, Query, description = "Filter by status, e.g. PENDING")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let filter = UserFilter {
        role: params.role,
        status: params.status,
    };
    let users = AdminService::new(&state.db)
        .get_users(filter, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Approve a pending station manager.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can approve managers
///
/// # Returns
/// - `200 OK` - The approved account
/// - `400 Bad Request` - Account is not a station manager
/// - `404 Not Found` - Account not found
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/approve",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Manager approved", body = UserDto),
        (status = 400, description = "Account is not a station manager", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_manager(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let user = AdminService::new(&state.db).approve_manager(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/reject",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Manager rejected", body = UserDto),
        (status = 400, description = "Account is not a station manager", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_manager(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let user = AdminService::new(&state.db).reject_manager(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create an inspector account assigned to a station.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can create inspectors
///
/// # Returns
/// - `201 Created` - The new inspector
/// - `400 Bad Request` - Invalid fields or unknown station
/// - `409 Conflict` - Email or badge number already in use
#[utoipa::path(
    post,
    path = "/api/admin/inspectors",
    tag = ADMIN_TAG,
    request_body = CreateInspectorDto,
    responses(
        (status = 201, description = "Inspector created", body = InspectorDto),
        (status = 400, description = "Invalid inspector data", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 409, description = "Email or badge number in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inspector(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInspectorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let inspector = AdminService::new(&state.db)
        .create_inspector(CreateInspectorParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(inspector.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/inspectors",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All inspectors", body = Vec<InspectorDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inspectors(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let inspectors: Vec<InspectorDto> = AdminService::new(&state.db)
        .get_inspectors()
        .await?
        .into_iter()
        .map(Inspector::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(inspectors)))
}
