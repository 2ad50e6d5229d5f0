use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, PaymentType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub vendor_id: i32,
    pub license_id: i32,
    #[schema(value_type = String)]
    pub payment_type: PaymentType,
    pub amount: i64,
    pub period: Option<String>,
    pub due_date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub transaction_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    pub license_id: i32,
    #[schema(value_type = String)]
    pub payment_type: PaymentType,
    pub amount: i64,
    pub period: Option<String>,
    pub due_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PayDto {
    pub transaction_ref: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaymentSummaryDto {
    pub total_paid: i64,
    pub total_outstanding: i64,
    pub overdue_count: u64,
}
