use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::ApplicationDto,
        inspection::InspectionDto,
        layout::{LayoutDto, SaveLayoutDto, ShopDto},
        license::LicenseDto,
        payment::PaymentDto,
        station::{
            AssignManagerDto, CreateStationDto, PaginatedStationsDto, StationDto,
            UpdateStationDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            application::Application,
            inspection::Inspection,
            layout::{SaveLayoutParams, Shop},
            license::License,
            payment::Payment,
            station::{CreateStationParams, UpdateStationParams},
        },
        service::{
            application::ApplicationService, inspection::InspectionService,
            layout::LayoutService, license::LicenseService, payment::PaymentService,
            station::StationService,
        },
        state::AppState,
    },
};

/// Tag for grouping station endpoints in OpenAPI documentation
pub static STATION_TAG: &str = "station";

#[derive(Deserialize)]
pub struct ApplicationStatusQuery {
    pub status: Option<ApplicationStatus>,
}

/// Create a new station.
///
/// The station code is stored uppercase and must be unique.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can create stations
///
/// # Returns
/// - `201 Created` - The new station
/// - `400 Bad Request` - Invalid station data
/// - `409 Conflict` - Station code already in use
#[utoipa::path(
    post,
    path = "/api/stations",
    tag = STATION_TAG,
    request_body = CreateStationDto,
    responses(
        (status = 201, description = "Station created", body = StationDto),
        (status = 400, description = "Invalid station data", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 409, description = "Station code already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_station(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let station = StationService::new(&state.db)
        .create(CreateStationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(station.into_dto())))
}

/// Get a page of stations ordered by name.
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = STATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved stations", body = PaginatedStationsDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "Account not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_approved().await?;

    let stations = StationService::new(&state.db)
        .get_all(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(stations.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/stations/{station_id}",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station details", body = StationDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_approved().await?;

    let station = StationService::new(&state.db).get(station_id).await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// Update a station's name, zone, city and platform count.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can edit stations
#[utoipa::path(
    put,
    path = "/api/stations/{station_id}",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    request_body = UpdateStationDto,
    responses(
        (status = 200, description = "Station updated", body = StationDto),
        (status = 400, description = "Invalid station data", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_station(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Json(payload): Json<UpdateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let station = StationService::new(&state.db)
        .update(UpdateStationParams::from_dto(station_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// Assign an approved station manager to a station.
///
/// A manager runs at most one station, so assigning moves them from any
/// station they managed before.
///
/// # Access Control
/// - `RailwayAdmin` - Only the railway admin can assign managers
///
/// # Returns
/// - `200 OK` - The station with its new manager
/// - `400 Bad Request` - Target is not an approved station manager
/// - `404 Not Found` - Station not found
#[utoipa::path(
    put,
    path = "/api/stations/{station_id}/manager",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    request_body = AssignManagerDto,
    responses(
        (status = 200, description = "Manager assigned", body = StationDto),
        (status = 400, description = "Not an approved station manager", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the railway admin", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_manager(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Json(payload): Json<AssignManagerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::RailwayAdmin])
        .await?;

    let station = StationService::new(&state.db)
        .assign_manager(station_id, payload.manager_id)
        .await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/layout",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station layout with its shops", body = LayoutDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 404, description = "Station has no layout yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_layout(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_approved().await?;

    let layout = LayoutService::new(&state.db).get(station_id).await?;

    Ok((StatusCode::OK, Json(layout.into_dto())))
}

/// Replace a station's layout geometry.
///
/// Shops are matched to the stored shops by shop number. Allocated shops cannot
/// be removed or resized.
///
/// # Access Control
/// - `ManageStation` - Manager of the station, or the railway admin
///
/// # Returns
/// - `200 OK` - The saved layout with area totals
/// - `400 Bad Request` - Geometry rule violated
/// - `404 Not Found` - Station not found
#[utoipa::path(
    put,
    path = "/api/stations/{station_id}/layout",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    request_body = SaveLayoutDto,
    responses(
        (status = 200, description = "Layout saved", body = LayoutDto),
        (status = 400, description = "Invalid layout", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage this station", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_layout(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Json(payload): Json<SaveLayoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageStation(station_id)])
        .await?;

    let layout = LayoutService::new(&state.db)
        .save(SaveLayoutParams::from_dto(station_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(layout.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/shops/available",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Shops open for applications", body = Vec<ShopDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_shops(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_approved().await?;

    let shops: Vec<ShopDto> = LayoutService::new(&state.db)
        .available_shops(station_id)
        .await?
        .into_iter()
        .map(Shop::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(shops)))
}

/// Get the applications submitted for a station's shops.
///
/// # Access Control
/// - `ManageStation` - Manager of the station, or the railway admin
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/applications",
    tag = STATION_TAG,
    params(
        ("station_id" = i32, Path, description = "Station ID"),
        ("status" = Option<String>, Query, description = "Filter by status, e.g. PENDING")
    ),
    responses(
        (status = 200, description = "Applications for the station", body = Vec<ApplicationDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage this station", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_applications(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
    Query(query): Query<ApplicationStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageStation(station_id)])
        .await?;

    let applications: Vec<ApplicationDto> = ApplicationService::new(&state.db)
        .get_by_station(station_id, query.status)
        .await?
        .into_iter()
        .map(Application::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(applications)))
}

/// Get the licenses issued at a station.
///
/// # Access Control
/// - `ViewStation` - Manager or inspector of the station, or the railway admin
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/licenses",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Licenses at the station", body = Vec<LicenseDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff of this station", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_licenses(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewStation(station_id)])
        .await?;

    let licenses: Vec<LicenseDto> = LicenseService::new(&state.db)
        .get_by_station(station_id)
        .await?
        .into_iter()
        .map(License::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(licenses)))
}

#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/inspections",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Inspections at the station", body = Vec<InspectionDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not staff of this station", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_inspections(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewStation(station_id)])
        .await?;

    let inspections: Vec<InspectionDto> = InspectionService::new(&state.db)
        .get_by_station(station_id)
        .await?
        .into_iter()
        .map(Inspection::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(inspections)))
}

/// Get the dues raised against licenses at a station.
///
/// # Access Control
/// - `ManageStation` - Manager of the station, or the railway admin
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/payments",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Dues at the station", body = Vec<PaymentDto>),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User does not manage this station", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_payments(
    State(state): State<AppState>,
    session: Session,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageStation(station_id)])
        .await?;

    let payments: Vec<PaymentDto> = PaymentService::new(&state.db)
        .get_by_station(station_id)
        .await?
        .into_iter()
        .map(Payment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(payments)))
}
