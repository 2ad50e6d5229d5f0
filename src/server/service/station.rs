//! Station management.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{station::StationRepository, user::UserRepository},
    error::AppError,
    model::{
        station::{CreateStationParams, PaginatedStations, Station, UpdateStationParams},
        total_pages,
    },
    util::validate,
};

/// Station codes are 2 to 8 letters or digits.
const STATION_CODE_LENGTH: std::ops::RangeInclusive<usize> = 2..=8;

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a station with an uppercase, unique code.
    ///
    /// # Returns
    /// - `Ok(Station)` - The new station
    /// - `Err(AppError::BadRequest)` - Invalid fields
    /// - `Err(AppError::Conflict)` - Code already used by another station
    pub async fn create(&self, params: CreateStationParams) -> Result<Station, AppError> {
        let params = CreateStationParams {
            name: validate::required_text("Name", &params.name)?,
            code: normalize_code(&params.code)?,
            zone: validate::required_text("Zone", &params.zone)?,
            city: validate::required_text("City", &params.city)?,
            platform_count: check_platforms(params.platform_count)?,
        };

        let repo = StationRepository::new(self.db);
        if repo.find_by_code(&params.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Station code {} is already in use",
                params.code
            )));
        }

        let station = repo.create(params).await?;
        tracing::info!("Created station {} ({})", station.code, station.id);

        Ok(station)
    }

    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<PaginatedStations, AppError> {
        validate::page(page, per_page)?;

        let (stations, total) = StationRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedStations {
            stations,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get(&self, id: i32) -> Result<Station, AppError> {
        StationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Station not found".to_string()))
    }

    /// Updates the descriptive fields of a station. The code never changes.
    pub async fn update(&self, params: UpdateStationParams) -> Result<Station, AppError> {
        let params = UpdateStationParams {
            id: params.id,
            name: validate::required_text("Name", &params.name)?,
            zone: validate::required_text("Zone", &params.zone)?,
            city: validate::required_text("City", &params.city)?,
            platform_count: check_platforms(params.platform_count)?,
        };

        StationRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Station not found".to_string()))
    }

    /// Makes an approved station manager responsible for a station.
    ///
    /// A manager runs at most one station, so they are removed from any station they
    /// managed before.
    ///
    /// # Returns
    /// - `Ok(Station)` - Station with its new manager
    /// - `Err(AppError::NotFound)` - Station or user missing
    /// - `Err(AppError::BadRequest)` - User is not an approved station manager
    pub async fn assign_manager(&self, station_id: i32, manager_id: i32) -> Result<Station, AppError> {
        let txn = self.db.begin().await?;

        let Some(manager) = UserRepository::new(&txn).find_by_id(manager_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if manager.role != UserRole::StationManager || !manager.is_approved() {
            return Err(AppError::BadRequest(
                "Only approved station managers can be assigned to a station".to_string(),
            ));
        }

        let Some(station) = StationRepository::new(&txn)
            .set_manager(station_id, manager_id)
            .await?
        else {
            return Err(AppError::NotFound("Station not found".to_string()));
        };

        txn.commit().await?;

        tracing::info!("Assigned manager {} to station {}", manager_id, station_id);

        Ok(station)
    }
}

fn normalize_code(code: &str) -> Result<String, AppError> {
    let code = code.trim().to_uppercase();
    if !STATION_CODE_LENGTH.contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest(
            "Station code must be 2 to 8 letters or digits".to_string(),
        ));
    }
    Ok(code)
}

fn check_platforms(count: i32) -> Result<i32, AppError> {
    if count < 1 {
        return Err(AppError::BadRequest(
            "A station needs at least one platform".to_string(),
        ));
    }
    Ok(count)
}
