//! Vendor factory for creating vendor profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::VerificationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating vendor profiles.
///
/// Defaults to an unverified (`PENDING`) profile with every check unset.
pub struct VendorFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    business_name: String,
    verified: bool,
}

impl<'a> VendorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            business_name: format!("Business {}", next_id()),
            verified: false,
        }
    }

    pub fn business_name(mut self, business_name: impl Into<String>) -> Self {
        self.business_name = business_name.into();
        self
    }

    /// Sets every verification check and marks the profile `VERIFIED`.
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub async fn build(self) -> Result<entity::vendor::Model, DbErr> {
        let now = Utc::now();
        let status = if self.verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        };

        entity::vendor::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            business_name: ActiveValue::Set(self.business_name),
            business_type: ActiveValue::Set("Food Stall".to_string()),
            owner_name: ActiveValue::Set("Owner".to_string()),
            pan_number: ActiveValue::Set("ABCDE1234F".to_string()),
            gst_number: ActiveValue::Set(None),
            bank_account_number: ActiveValue::Set("001234567890".to_string()),
            ifsc_code: ActiveValue::Set("SBIN0001234".to_string()),
            food_license_number: ActiveValue::Set(None),
            annual_turnover: ActiveValue::Set(500_000),
            railway_declaration: ActiveValue::Set(true),
            identity_verified: ActiveValue::Set(self.verified),
            bank_verified: ActiveValue::Set(self.verified),
            business_verified: ActiveValue::Set(self.verified),
            food_license_verified: ActiveValue::Set(self.verified),
            police_verified: ActiveValue::Set(self.verified),
            financial_verified: ActiveValue::Set(self.verified),
            railway_declaration_verified: ActiveValue::Set(self.verified),
            verification_status: ActiveValue::Set(status),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unverified vendor profile for the user.
pub async fn create_vendor(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db, user_id).build().await
}

/// Creates a fully verified vendor profile for the user.
pub async fn create_verified_vendor(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db, user_id).verified(true).build().await
}
