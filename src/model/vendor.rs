use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VerificationChecksDto {
    pub identity: bool,
    pub bank: bool,
    pub business: bool,
    pub food_license: bool,
    pub police: bool,
    pub financial: bool,
    pub railway_declaration: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VerificationSummaryDto {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
    #[schema(value_type = String)]
    pub status: VerificationStatus,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VendorDto {
    pub id: i32,
    pub user_id: i32,
    pub business_name: String,
    pub business_type: String,
    pub owner_name: String,
    pub pan_number: String,
    pub gst_number: Option<String>,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub food_license_number: Option<String>,
    pub annual_turnover: i64,
    pub railway_declaration: bool,
    pub checks: VerificationChecksDto,
    pub verification: VerificationSummaryDto,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating or updating the caller's vendor profile.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct VendorProfileDto {
    pub business_name: String,
    pub business_type: String,
    pub owner_name: String,
    pub pan_number: String,
    pub gst_number: Option<String>,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub food_license_number: Option<String>,
    pub annual_turnover: i64,
    pub railway_declaration: bool,
}

/// Sets a single verification check.
///
/// `check` is one of `IDENTITY`, `BANK`, `BUSINESS`, `FOOD_LICENSE`, `POLICE`,
/// `FINANCIAL`, `RAILWAY_DECLARATION`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetCheckDto {
    #[schema(value_type = String)]
    pub check: VerificationCheckDto,
    pub value: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationCheckDto {
    Identity,
    Bank,
    Business,
    FoodLicense,
    Police,
    Financial,
    RailwayDeclaration,
}
