//! License domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LicenseStatus;

use crate::model::license::{LicenseDto, LicenseVerificationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub id: i32,
    pub license_number: String,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub application_id: i32,
    pub monthly_rent: i64,
    pub status: LicenseStatus,
    pub issued_at: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub qr_code: String,
    pub revocation_reason: Option<String>,
}

impl License {
    pub fn from_entity(entity: entity::license::Model) -> Self {
        Self {
            id: entity.id,
            license_number: entity.license_number,
            vendor_id: entity.vendor_id,
            station_id: entity.station_id,
            shop_id: entity.shop_id,
            application_id: entity.application_id,
            monthly_rent: entity.monthly_rent,
            status: entity.status,
            issued_at: entity.issued_at,
            valid_from: entity.valid_from,
            valid_until: entity.valid_until,
            qr_code: entity.qr_code,
            revocation_reason: entity.revocation_reason,
        }
    }

    /// Active and `now` falls inside the validity window.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.status == LicenseStatus::Active && self.valid_from <= now && now <= self.valid_until
    }

    pub fn into_dto(self) -> LicenseDto {
        LicenseDto {
            id: self.id,
            license_number: self.license_number,
            vendor_id: self.vendor_id,
            station_id: self.station_id,
            shop_id: self.shop_id,
            application_id: self.application_id,
            monthly_rent: self.monthly_rent,
            status: self.status,
            issued_at: self.issued_at,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            qr_code: self.qr_code,
            revocation_reason: self.revocation_reason,
        }
    }
}

/// Formats a license number as `VV-{STATION_CODE}-{YYYY}-{NNNNNN}`.
pub fn format_license_number(station_code: &str, year: i32, serial: u32) -> String {
    format!("VV-{}-{}-{:06}", station_code, year, serial)
}

/// Public view of a license for QR verification.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseVerification {
    pub license: License,
    pub business_name: String,
    pub station_name: String,
    pub station_code: String,
    pub shop_number: String,
    pub valid: bool,
}

impl LicenseVerification {
    pub fn into_dto(self) -> LicenseVerificationDto {
        LicenseVerificationDto {
            license_number: self.license.license_number,
            valid: self.valid,
            status: self.license.status,
            business_name: self.business_name,
            station_name: self.station_name,
            station_code: self.station_code,
            shop_number: self.shop_number,
            valid_from: self.license.valid_from,
            valid_until: self.license.valid_until,
        }
    }
}

/// Fields for inserting a newly issued license.
#[derive(Debug, Clone)]
pub struct IssueLicenseParams {
    pub license_number: String,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub application_id: i32,
    pub monthly_rent: i64,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub qr_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn license(status: LicenseStatus, from: DateTime<Utc>, until: DateTime<Utc>) -> License {
        License {
            id: 1,
            license_number: "VV-NDLS-2026-000001".to_string(),
            vendor_id: 1,
            station_id: 1,
            shop_id: 1,
            application_id: 1,
            monthly_rent: 10_000,
            status,
            issued_at: from,
            valid_from: from,
            valid_until: until,
            qr_code: String::new(),
            revocation_reason: None,
        }
    }

    #[test]
    fn formats_number_with_padding() {
        assert_eq!(format_license_number("NDLS", 2026, 42), "VV-NDLS-2026-000042");
    }

    #[test]
    fn active_license_in_window_is_valid() {
        let now = Utc::now();
        let l = license(LicenseStatus::Active, now - Duration::days(1), now + Duration::days(1));
        assert!(l.is_valid_at(now));
    }

    #[test]
    fn suspended_license_is_not_valid() {
        let now = Utc::now();
        let l = license(LicenseStatus::Suspended, now - Duration::days(1), now + Duration::days(1));
        assert!(!l.is_valid_at(now));
    }

    #[test]
    fn active_license_past_window_is_not_valid() {
        let now = Utc::now();
        let l = license(LicenseStatus::Active, now - Duration::days(10), now - Duration::days(1));
        assert!(!l.is_valid_at(now));
    }
}
