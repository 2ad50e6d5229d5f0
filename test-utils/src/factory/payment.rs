//! Vendor payment factory.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, PaymentType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for dues raised against a license.
///
/// Defaults to a `PENDING` rent of 10000 due in 10 days.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    vendor_id: i32,
    license_id: i32,
    amount: i64,
    status: PaymentStatus,
    due_date: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, license: &entity::license::Model) -> Self {
        Self {
            db,
            vendor_id: license.vendor_id,
            license_id: license.id,
            amount: 10_000,
            status: PaymentStatus::Pending,
            due_date: Utc::now() + Duration::days(10),
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }

    pub async fn build(self) -> Result<entity::vendor_payment::Model, DbErr> {
        let paid = self.status == PaymentStatus::Paid;
        entity::vendor_payment::ActiveModel {
            vendor_id: ActiveValue::Set(self.vendor_id),
            license_id: ActiveValue::Set(self.license_id),
            payment_type: ActiveValue::Set(PaymentType::Rent),
            amount: ActiveValue::Set(self.amount),
            period: ActiveValue::Set(None),
            due_date: ActiveValue::Set(self.due_date),
            status: ActiveValue::Set(self.status),
            paid_at: ActiveValue::Set(paid.then(Utc::now)),
            transaction_ref: ActiveValue::Set(paid.then(|| "TXN-TEST".to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
