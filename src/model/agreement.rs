use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AgreementStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AgreementDto {
    pub id: i32,
    pub application_id: i32,
    pub license_id: i32,
    pub vendor_id: i32,
    pub station_id: i32,
    pub monthly_rent: i64,
    pub security_deposit: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub terms: String,
    #[schema(value_type = String)]
    pub status: AgreementStatus,
    pub signed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
