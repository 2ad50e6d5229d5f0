//! Station domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::station::{CreateStationDto, PaginatedStationsDto, StationDto, UpdateStationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
    pub manager_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Station {
    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            zone: entity.zone,
            city: entity.city,
            platform_count: entity.platform_count,
            manager_id: entity.manager_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StationDto {
        StationDto {
            id: self.id,
            name: self.name,
            code: self.code,
            zone: self.zone,
            city: self.city,
            platform_count: self.platform_count,
            manager_id: self.manager_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStationParams {
    pub name: String,
    pub code: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
}

impl CreateStationParams {
    pub fn from_dto(dto: CreateStationDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
            zone: dto.zone,
            city: dto.city,
            platform_count: dto.platform_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStationParams {
    pub id: i32,
    pub name: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
}

impl UpdateStationParams {
    pub fn from_dto(id: i32, dto: UpdateStationDto) -> Self {
        Self {
            id,
            name: dto.name,
            zone: dto.zone,
            city: dto.city,
            platform_count: dto.platform_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedStations {
    pub stations: Vec<Station>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStations {
    pub fn into_dto(self) -> PaginatedStationsDto {
        PaginatedStationsDto {
            stations: self.stations.into_iter().map(Station::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
