//! Inspection factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::InspectionResult;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inspections logged against a license.
///
/// Defaults to a `PASS` with hygiene rating 4, inspected now.
pub struct InspectionFactory<'a> {
    db: &'a DatabaseConnection,
    license_id: i32,
    station_id: i32,
    inspector_id: i32,
    result: InspectionResult,
    inspected_at: DateTime<Utc>,
}

impl<'a> InspectionFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        license: &entity::license::Model,
        inspector: &entity::inspector::Model,
    ) -> Self {
        Self {
            db,
            license_id: license.id,
            station_id: license.station_id,
            inspector_id: inspector.id,
            result: InspectionResult::Pass,
            inspected_at: Utc::now(),
        }
    }

    pub fn result(mut self, result: InspectionResult) -> Self {
        self.result = result;
        self
    }

    pub fn inspected_at(mut self, inspected_at: DateTime<Utc>) -> Self {
        self.inspected_at = inspected_at;
        self
    }

    pub async fn build(self) -> Result<entity::inspection::Model, DbErr> {
        entity::inspection::ActiveModel {
            license_id: ActiveValue::Set(self.license_id),
            inspector_id: ActiveValue::Set(self.inspector_id),
            station_id: ActiveValue::Set(self.station_id),
            result: ActiveValue::Set(self.result),
            hygiene_rating: ActiveValue::Set(4),
            remarks: ActiveValue::Set("Routine check".to_string()),
            violations: ActiveValue::Set(None),
            inspected_at: ActiveValue::Set(self.inspected_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
