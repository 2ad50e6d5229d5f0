use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the counters for the caller's role.
///
/// The response is tagged with `role` and carries the vendor, station manager,
/// inspector or railway admin counters.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Role specific counters", body = DashboardDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Account not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let dashboard = DashboardService::new(&state.db).get(&user).await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
