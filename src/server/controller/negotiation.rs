use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        negotiation::{NegotiationMessageDto, NegotiationRoomDto, PostMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::negotiation::PostMessageParams,
        service::negotiation::NegotiationService,
        state::AppState,
    },
};

/// Tag for grouping negotiation endpoints in OpenAPI documentation
pub static NEGOTIATION_TAG: &str = "negotiation";

/// Get an application's negotiation room with its messages, oldest first.
///
/// # Access Control
/// - The applicant vendor, the negotiating manager, or the railway admin
#[utoipa::path(
    get,
    path = "/api/applications/{application_id}/negotiation",
    tag = NEGOTIATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Negotiation room", body = NegotiationRoomDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "No negotiation for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let room = NegotiationService::new(&state.db)
        .get_room(&user, application_id)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Post a message, optionally with a rent offer.
///
/// The other participant is notified.
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/negotiation/messages",
    tag = NEGOTIATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    request_body = PostMessageDto,
    responses(
        (status = 201, description = "Message posted", body = NegotiationMessageDto),
        (status = 400, description = "Room closed, empty message or invalid offer", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "No negotiation for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
    Json(payload): Json<PostMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let params = PostMessageParams {
        application_id,
        content: payload.content,
        offered_rent: payload.offered_rent,
    };
    let message = NegotiationService::new(&state.db)
        .post_message(&user, params)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Accept the other participant's current offer.
///
/// The room moves to agreed and the application's final rent is set.
#[utoipa::path(
    post,
    path = "/api/applications/{application_id}/negotiation/accept",
    tag = NEGOTIATION_TAG,
    params(("application_id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Offer accepted", body = NegotiationRoomDto),
        (status = 400, description = "Room closed or no offer from the other side", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "No negotiation for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_offer(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_approved().await?;

    let room = NegotiationService::new(&state.db)
        .accept_offer(&user, application_id)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}
