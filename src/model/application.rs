use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub proposed_rent: i64,
    pub final_rent: Option<i64>,
    pub duration_months: i32,
    pub business_plan: String,
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitApplicationDto {
    pub station_id: i32,
    pub shop_id: i32,
    pub proposed_rent: i64,
    pub duration_months: i32,
    pub business_plan: String,
}

/// Everything created when an application is approved.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApprovalDto {
    pub application: ApplicationDto,
    pub license: crate::model::license::LicenseDto,
    pub agreement: crate::model::agreement::AgreementDto,
    pub payments: Vec<crate::model::payment::PaymentDto>,
}
