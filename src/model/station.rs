use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StationDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
    pub manager_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedStationsDto {
    pub stations: Vec<StationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateStationDto {
    pub name: String,
    pub code: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateStationDto {
    pub name: String,
    pub zone: String,
    pub city: String,
    pub platform_count: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AssignManagerDto {
    pub manager_id: i32,
}
