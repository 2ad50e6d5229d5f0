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
        payment::{CreatePaymentDto, PayDto, PaymentDto, PaymentSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::{Payment, RaiseDueParams},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Raise a due against a license. The holder is notified.
///
/// # Access Control
/// - `ManageStation` - Manager of the license's station, or the railway admin
///
/// # Returns
/// - `201 Created` - The pending due
/// - `400 Bad Request` - Amount not positive or period not `YYYY-MM`
/// - `404 Not Found` - License not found
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Due raised", body = PaymentDto),
        (status = 400, description = "Invalid due", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage the station", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_due(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create_due(&user, RaiseDueParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/payments/mine",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "The caller's dues", body = Vec<PaymentDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let payments: Vec<PaymentDto> = PaymentService::new(&state.db)
        .get_mine(user.id)
        .await?
        .into_iter()
        .map(Payment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(payments)))
}

#[utoipa::path(
    get,
    path = "/api/payments/summary",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "The caller's paid, outstanding and overdue totals", body = PaymentSummaryDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not a vendor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let summary = PaymentService::new(&state.db)
        .summary_for_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Pay one of the caller's pending or overdue dues.
///
/// # Returns
/// - `200 OK` - The paid due
/// - `400 Bad Request` - Already paid or no transaction reference
/// - `403 Forbidden` - Due belongs to another vendor
/// - `404 Not Found` - Due not found
#[utoipa::path(
    post,
    path = "/api/payments/{payment_id}/pay",
    tag = PAYMENT_TAG,
    params(("payment_id" = i32, Path, description = "Payment ID")),
    request_body = PayDto,
    responses(
        (status = 200, description = "Due paid", body = PaymentDto),
        (status = 400, description = "Already paid or missing reference", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Not the vendor's due", body = ErrorDto),
        (status = 404, description = "Due not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay(
    State(state): State<AppState>,
    session: Session,
    Path(payment_id): Path<i32>,
    Json(payload): Json<PayDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Vendor])
        .await?;

    let payment = PaymentService::new(&state.db)
        .pay(user.id, payment_id, &payload.transaction_ref)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
