//! Vendor agreement domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AgreementStatus;

use crate::model::agreement::AgreementDto;

/// Security deposit as a multiple of the monthly rent.
pub const SECURITY_DEPOSIT_MONTHS: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Agreement {
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
    pub status: AgreementStatus,
    pub signed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Agreement {
    pub fn from_entity(entity: entity::vendor_agreement::Model) -> Self {
        Self {
            id: entity.id,
            application_id: entity.application_id,
            license_id: entity.license_id,
            vendor_id: entity.vendor_id,
            station_id: entity.station_id,
            monthly_rent: entity.monthly_rent,
            security_deposit: entity.security_deposit,
            start_date: entity.start_date,
            end_date: entity.end_date,
            terms: entity.terms,
            status: entity.status,
            signed_at: entity.signed_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AgreementDto {
        AgreementDto {
            id: self.id,
            application_id: self.application_id,
            license_id: self.license_id,
            vendor_id: self.vendor_id,
            station_id: self.station_id,
            monthly_rent: self.monthly_rent,
            security_deposit: self.security_deposit,
            start_date: self.start_date,
            end_date: self.end_date,
            terms: self.terms,
            status: self.status,
            signed_at: self.signed_at,
            created_at: self.created_at,
        }
    }
}

/// Fields for inserting the agreement that accompanies a license.
#[derive(Debug, Clone)]
pub struct CreateAgreementParams {
    pub application_id: i32,
    pub license_id: i32,
    pub vendor_id: i32,
    pub station_id: i32,
    pub monthly_rent: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub terms: String,
}

/// Standard licence terms written into every agreement.
pub fn standard_terms(
    business_name: &str,
    station_name: &str,
    shop_number: &str,
    monthly_rent: i64,
    duration_months: i32,
) -> String {
    format!(
        "This agreement licenses {business} to operate shop {shop} at {station} for \
         {months} months at a monthly rent of Rs. {rent}. A security deposit of \
         Rs. {deposit} is payable before occupation. Rent is due on the first day of \
         each month. The licensee shall keep the premises hygienic, display the license \
         QR code at the counter and permit inspection by railway inspectors at any time. \
         The license may be suspended or revoked for violations.",
        business = business_name,
        shop = shop_number,
        station = station_name,
        months = duration_months,
        rent = monthly_rent,
        deposit = monthly_rent * SECURITY_DEPOSIT_MONTHS,
    )
}
