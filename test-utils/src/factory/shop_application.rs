//! Shop application factory.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for shop applications.
///
/// Defaults to a `PENDING` 12 month application proposing a rent of 10000.
pub struct ShopApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    vendor_id: i32,
    station_id: i32,
    shop_id: i32,
    proposed_rent: i64,
    final_rent: Option<i64>,
    duration_months: i32,
    status: ApplicationStatus,
}

impl<'a> ShopApplicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vendor_id: i32, station_id: i32, shop_id: i32) -> Self {
        Self {
            db,
            vendor_id,
            station_id,
            shop_id,
            proposed_rent: 10_000,
            final_rent: None,
            duration_months: 12,
            status: ApplicationStatus::Pending,
        }
    }

    pub fn proposed_rent(mut self, proposed_rent: i64) -> Self {
        self.proposed_rent = proposed_rent;
        self
    }

    pub fn final_rent(mut self, final_rent: i64) -> Self {
        self.final_rent = Some(final_rent);
        self
    }

    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.duration_months = duration_months;
        self
    }

    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::shop_application::Model, DbErr> {
        entity::shop_application::ActiveModel {
            vendor_id: ActiveValue::Set(self.vendor_id),
            station_id: ActiveValue::Set(self.station_id),
            shop_id: ActiveValue::Set(self.shop_id),
            proposed_rent: ActiveValue::Set(self.proposed_rent),
            final_rent: ActiveValue::Set(self.final_rent),
            duration_months: ActiveValue::Set(self.duration_months),
            business_plan: ActiveValue::Set("Tea and snacks".to_string()),
            status: ActiveValue::Set(self.status),
            rejection_reason: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
