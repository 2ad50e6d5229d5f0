//! Inspection domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::InspectionResult;

use crate::model::inspection::{InspectionDto, LogInspectionDto};

/// Lowest hygiene rating.
pub const MIN_HYGIENE_RATING: i32 = 1;
/// Highest hygiene rating.
pub const MAX_HYGIENE_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub id: i32,
    pub license_id: i32,
    pub inspector_id: i32,
    pub station_id: i32,
    pub result: InspectionResult,
    pub hygiene_rating: i32,
    pub remarks: String,
    pub violations: Option<String>,
    pub inspected_at: DateTime<Utc>,
}

impl Inspection {
    pub fn from_entity(entity: entity::inspection::Model) -> Self {
        Self {
            id: entity.id,
            license_id: entity.license_id,
            inspector_id: entity.inspector_id,
            station_id: entity.station_id,
            result: entity.result,
            hygiene_rating: entity.hygiene_rating,
            remarks: entity.remarks,
            violations: entity.violations,
            inspected_at: entity.inspected_at,
        }
    }

    pub fn into_dto(self) -> InspectionDto {
        InspectionDto {
            id: self.id,
            license_id: self.license_id,
            inspector_id: self.inspector_id,
            station_id: self.station_id,
            result: self.result,
            hygiene_rating: self.hygiene_rating,
            remarks: self.remarks,
            violations: self.violations,
            inspected_at: self.inspected_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogInspectionParams {
    pub license_id: i32,
    pub result: InspectionResult,
    pub hygiene_rating: i32,
    pub remarks: String,
    pub violations: Option<String>,
}

impl LogInspectionParams {
    pub fn from_dto(dto: LogInspectionDto) -> Self {
        Self {
            license_id: dto.license_id,
            result: dto.result,
            hygiene_rating: dto.hygiene_rating,
            remarks: dto.remarks,
            violations: dto.violations,
        }
    }
}
