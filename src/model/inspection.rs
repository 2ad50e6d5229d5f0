use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::InspectionResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InspectionDto {
    pub id: i32,
    pub license_id: i32,
    pub inspector_id: i32,
    pub station_id: i32,
    #[schema(value_type = String)]
    pub result: InspectionResult,
    pub hygiene_rating: i32,
    pub remarks: String,
    pub violations: Option<String>,
    pub inspected_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LogInspectionDto {
    pub license_id: i32,
    #[schema(value_type = String)]
    pub result: InspectionResult,
    pub hygiene_rating: i32,
    pub remarks: String,
    pub violations: Option<String>,
}
