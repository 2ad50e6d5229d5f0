//! Route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa_axum::routes!` so the OpenAPI
//! document served at `/docs` always matches the routes that exist.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        agreement::{self, AGREEMENT_TAG},
        application::{self, APPLICATION_TAG},
        auth::{self, AUTH_TAG},
        dashboard::{self, DASHBOARD_TAG},
        document::{self, DOCUMENT_TAG},
        inspection::{self, INSPECTION_TAG},
        license::{self, LICENSE_TAG},
        negotiation::{self, NEGOTIATION_TAG},
        notification::{self, NOTIFICATION_TAG},
        payment::{self, PAYMENT_TAG},
        station::{self, STATION_TAG},
        vendor::{self, VENDOR_TAG},
    },
    error::{internal::InternalError, AppError},
    model::document::MAX_UPLOAD_BYTES,
    state::AppState,
};

/// Milliseconds for one auth request to replenish per client IP, two per second.
const AUTH_REPLENISH_MS: u64 = 500;
/// Requests a client IP may burst on the auth routes.
const AUTH_BURST_SIZE: u32 = 10;
/// Room for multipart framing around the largest accepted file.
const UPLOAD_BODY_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "VendorVault", description = "Railway station vendor licensing API"),
    tags(
        (name = AUTH_TAG, description = "Registration and sessions"),
        (name = ADMIN_TAG, description = "Railway admin account management"),
        (name = STATION_TAG, description = "Stations, layouts and station listings"),
        (name = VENDOR_TAG, description = "Vendor profiles and verification"),
        (name = DOCUMENT_TAG, description = "Verification documents"),
        (name = APPLICATION_TAG, description = "Shop applications"),
        (name = NEGOTIATION_TAG, description = "Rent negotiation"),
        (name = LICENSE_TAG, description = "Licenses and public verification"),
        (name = AGREEMENT_TAG, description = "Vendor agreements"),
        (name = INSPECTION_TAG, description = "Inspections"),
        (name = PAYMENT_TAG, description = "Dues and payments"),
        (name = NOTIFICATION_TAG, description = "In-app notifications"),
        (name = DASHBOARD_TAG, description = "Role specific counters"),
    )
)]
struct ApiDoc;

/// Builds the application router with Swagger UI at `/docs`.
///
/// The auth routes are rate limited per client IP, which needs the server to be
/// started with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting its state
/// - `Err(AppError::InternalErr(RateLimiterConfig))` - Rate limiter settings rejected
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(AUTH_REPLENISH_MS)
        .burst_size(AUTH_BURST_SIZE)
        .finish()
        .ok_or(InternalError::RateLimiterConfig)?;

    let auth_routes = OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let upload_routes = OpenApiRouter::new()
        .routes(routes!(document::upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_BODY_OVERHEAD));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_routes)
        .merge(upload_routes)
        .routes(routes!(auth::me))
        // Admin
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::approve_manager))
        .routes(routes!(admin::reject_manager))
        .routes(routes!(admin::get_inspectors, admin::create_inspector))
        // Stations
        .routes(routes!(station::get_stations, station::create_station))
        .routes(routes!(station::get_station, station::update_station))
        .routes(routes!(station::assign_manager))
        .routes(routes!(station::get_layout, station::save_layout))
        .routes(routes!(station::get_available_shops))
        .routes(routes!(station::get_station_applications))
        .routes(routes!(station::get_station_licenses))
        .routes(routes!(station::get_station_inspections))
        .routes(routes!(station::get_station_payments))
        // Vendors
        .routes(routes!(
            vendor::get_my_profile,
            vendor::create_profile,
            vendor::update_profile
        ))
        .routes(routes!(vendor::get_vendors))
        .routes(routes!(vendor::get_vendor))
        .routes(routes!(vendor::set_check))
        .routes(routes!(vendor::reject_vendor))
        .routes(routes!(vendor::get_vendor_documents))
        .routes(routes!(vendor::get_vendor_payment_summary))
        // Documents
        .routes(routes!(document::submit_document))
        .routes(routes!(document::get_my_documents))
        .routes(routes!(document::review_document))
        // Applications and negotiation
        .routes(routes!(application::submit_application))
        .routes(routes!(application::get_my_applications))
        .routes(routes!(application::get_application))
        .routes(routes!(application::withdraw_application))
        .routes(routes!(application::start_negotiation))
        .routes(routes!(application::reject_application))
        .routes(routes!(application::approve_application))
        .routes(routes!(negotiation::get_room))
        .routes(routes!(negotiation::post_message))
        .routes(routes!(negotiation::accept_offer))
        // Licenses
        .routes(routes!(license::get_my_licenses))
        .routes(routes!(license::get_license))
        .routes(routes!(license::verify_license))
        .routes(routes!(license::suspend_license))
        .routes(routes!(license::reinstate_license))
        .routes(routes!(license::revoke_license))
        .routes(routes!(license::get_license_inspections))
        .routes(routes!(license::get_license_payments))
        // Agreements
        .routes(routes!(agreement::get_my_agreements))
        .routes(routes!(agreement::get_agreement))
        .routes(routes!(agreement::sign_agreement))
        // Inspections
        .routes(routes!(inspection::log_inspection))
        .routes(routes!(inspection::get_my_inspections))
        .routes(routes!(inspection::get_vendor_inspections))
        // Payments
        .routes(routes!(payment::create_due))
        .routes(routes!(payment::get_my_payments))
        .routes(routes!(payment::get_my_summary))
        .routes(routes!(payment::pay))
        // Notifications
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_read))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(dashboard::get_dashboard))
        .split_for_parts();

    Ok(router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api)))
}
