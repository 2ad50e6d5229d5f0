//! License factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::LicenseStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for licenses issued against an application.
///
/// Defaults to an `ACTIVE` license valid from now for 365 days.
pub struct LicenseFactory<'a> {
    db: &'a DatabaseConnection,
    vendor_id: i32,
    station_id: i32,
    shop_id: i32,
    application_id: i32,
    monthly_rent: i64,
    status: LicenseStatus,
    valid_from: DateTime<Utc>,
    valid_until: DateTime<Utc>,
}

impl<'a> LicenseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, application: &entity::shop_application::Model) -> Self {
        let now = Utc::now();
        Self {
            db,
            vendor_id: application.vendor_id,
            station_id: application.station_id,
            shop_id: application.shop_id,
            application_id: application.id,
            monthly_rent: application.final_rent.unwrap_or(application.proposed_rent),
            status: LicenseStatus::Active,
            valid_from: now,
            valid_until: now + Duration::days(365),
        }
    }

    pub fn status(mut self, status: LicenseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validity(mut self, valid_from: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        self.valid_from = valid_from;
        self.valid_until = valid_until;
        self
    }

    pub async fn build(self) -> Result<entity::license::Model, DbErr> {
        entity::license::ActiveModel {
            license_number: ActiveValue::Set(format!("VV-TEST-2026-{:06}", next_id())),
            vendor_id: ActiveValue::Set(self.vendor_id),
            station_id: ActiveValue::Set(self.station_id),
            shop_id: ActiveValue::Set(self.shop_id),
            application_id: ActiveValue::Set(self.application_id),
            monthly_rent: ActiveValue::Set(self.monthly_rent),
            status: ActiveValue::Set(self.status),
            issued_at: ActiveValue::Set(self.valid_from),
            valid_from: ActiveValue::Set(self.valid_from),
            valid_until: ActiveValue::Set(self.valid_until),
            qr_code: ActiveValue::Set("data:image/svg+xml;base64,".to_string()),
            revocation_reason: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
