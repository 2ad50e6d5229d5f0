use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParams};
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, PaymentType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_overdue;
mod mark_paid;

fn rent_due(license: &entity::license::Model, due_date: DateTime<Utc>) -> CreatePaymentParams {
    CreatePaymentParams {
        vendor_id: license.vendor_id,
        license_id: license.id,
        payment_type: PaymentType::Rent,
        amount: license.monthly_rent,
        period: Some(due_date.format("%Y-%m").to_string()),
        due_date,
    }
}
