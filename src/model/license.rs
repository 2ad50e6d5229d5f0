use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LicenseStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LicenseDto {
    pub id: i32,
    pub license_number: String,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub application_id: i32,
    pub monthly_rent: i64,
    #[schema(value_type = String)]
    pub status: LicenseStatus,
    pub issued_at: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// SVG QR code as a `data:` URL.
    pub qr_code: String,
    pub revocation_reason: Option<String>,
}

/// Public result of scanning a license QR code.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LicenseVerificationDto {
    pub license_number: String,
    pub valid: bool,
    #[schema(value_type = String)]
    pub status: LicenseStatus,
    pub business_name: String,
    pub station_name: String,
    pub station_code: String,
    pub shop_number: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuspendLicenseDto {
    pub reason: Option<String>,
}
