use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{agreement::AgreementDto, api::ErrorDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::agreement::Agreement,
        service::agreement::AgreementService,
        state::AppState,
    },
};

/// Tag for grouping agreement endpoints in OpenAPI documentation
pub static AGREEMENT_TAG: &str = "agreement";

#[utoipa::path(
    get,
    path = "/api/agreements/mine",
    tag = AGREEMENT_TAG,
    responses(
        (status = 200, description = "The caller's agreements", body = Vec<AgreementDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_agreements(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let agreements: Vec<AgreementDto> = AgreementService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(Agreement::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(agreements)))
}

#[utoipa::path(
    get,
    path = "/api/agreements/{agreement_id}",
    tag = AGREEMENT_TAG,
    params(("agreement_id" = i32, Path, description = "Agreement ID")),
    responses(
        (status = 200, description = "Agreement details", body = AgreementDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the vendor or station staff", body = ErrorDto),
        (status = 404, description = "Agreement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_agreement(
    State(state): State<AppState>,
    session: Session,
    Path(agreement_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let agreement = AgreementService::new(&state.db)
        .get(&user, agreement_id)
        .await?;

    Ok((StatusCode::OK, Json(agreement.into_dto())))
}

/// Sign an agreement awaiting the vendor's signature.
#[utoipa::path(
    post,
    path = "/api/agreements/{agreement_id}/sign",
    tag = AGREEMENT_TAG,
    params(("agreement_id" = i32, Path, description = "Agreement ID")),
    responses(
        (status = 200, description = "Agreement signed", body = AgreementDto),
        (status = 400, description = "Agreement is not awaiting signature", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the agreement's vendor", body = ErrorDto),
        (status = 404, description = "Agreement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_agreement(
    State(state): State<AppState>,
    session: Session,
    Path(agreement_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let agreement = AgreementService::new(&state.db)
        .sign(user.id, agreement_id)
        .await?;

    Ok((StatusCode::OK, Json(agreement.into_dto())))
}
