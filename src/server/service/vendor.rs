//! Vendor profiles and the seven-check verification.

use entity::sea_orm_active_enums::{NotificationKind, UserRole, VerificationStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::vendor::VendorRepository,
    error::{auth::AuthError, AppError},
    model::{
        notification::NewNotification,
        user::User,
        vendor::{Vendor, VendorProfileParams, VerificationCheck},
    },
    service::notification,
    util::validate,
};

pub struct VendorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the caller's vendor profile with every check unset.
    ///
    /// # Returns
    /// - `Ok(Vendor)` - The new profile
    /// - `Err(AppError::BadRequest)` - Invalid fields
    /// - `Err(AppError::Conflict)` - The user already has a profile
    pub async fn create_profile(
        &self,
        user_id: i32,
        params: VendorProfileParams,
    ) -> Result<Vendor, AppError> {
        let params = normalize_profile(params)?;

        let repo = VendorRepository::new(self.db);
        if repo.find_by_user(user_id).await?.is_some() {
            return Err(AppError::Conflict("Vendor profile already exists".to_string()));
        }

        let vendor = repo.create(user_id, params).await?;
        tracing::info!("Created vendor profile {} for user {}", vendor.id, user_id);

        Ok(vendor)
    }

    /// Updates the caller's profile. A verified profile is frozen.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: VendorProfileParams,
    ) -> Result<Vendor, AppError> {
        let params = normalize_profile(params)?;
        let vendor = self.get_mine(user_id).await?;

        if vendor.is_verified() {
            return Err(AppError::BadRequest(
                "A verified profile can no longer be edited".to_string(),
            ));
        }

        VendorRepository::new(self.db)
            .update_profile(vendor.id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vendor, AppError> {
        VendorRepository::new(self.db)
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor profile not found".to_string()))
    }

    /// Gets a profile for its owner, a station manager or a railway admin.
    pub async fn get(&self, actor: &User, vendor_id: i32) -> Result<Vendor, AppError> {
        let vendor = self.find(vendor_id).await?;

        let staff = matches!(actor.role, UserRole::StationManager | UserRole::RailwayAdmin);
        if !staff && vendor.user_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("view of vendor {}", vendor_id),
            )
            .into());
        }

        Ok(vendor)
    }

    pub async fn get_all(&self, status: Option<VerificationStatus>) -> Result<Vec<Vendor>, AppError> {
        Ok(VendorRepository::new(self.db).get_all(status).await?)
    }

    /// Sets one verification check and recomputes the vendor's status.
    pub async fn set_check(
        &self,
        vendor_id: i32,
        check: VerificationCheck,
        value: bool,
    ) -> Result<Vendor, AppError> {
        let vendor = self.find(vendor_id).await?;
        let (vendor, newly_verified) = apply_check(self.db, vendor, check, value).await?;

        if newly_verified {
            notification::deliver(self.db, vec![verified_notification(&vendor)]).await;
        }

        Ok(vendor)
    }

    /// Rejects a vendor. The status no longer follows the checks afterwards.
    pub async fn reject(&self, vendor_id: i32, reason: &str) -> Result<Vendor, AppError> {
        let reason = validate::required_text("Reason", reason)?;

        let vendor = VendorRepository::new(self.db)
            .reject(vendor_id, reason.clone())
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        tracing::info!("Rejected vendor {}", vendor.id);

        notification::deliver(
            self.db,
            vec![NewNotification::new(
                vendor.user_id,
                NotificationKind::Alert,
                "Verification rejected",
                format!("Your vendor verification was rejected: {}", reason),
            )
            .link("/vendor/profile")],
        )
        .await;

        Ok(vendor)
    }

    async fn find(&self, vendor_id: i32) -> Result<Vendor, AppError> {
        VendorRepository::new(self.db)
            .find_by_id(vendor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))
    }
}

/// Stores a check change together with the status it implies.
///
/// # Returns
/// - `Ok((Vendor, true))` - Updated vendor whose verification this change completed
/// - `Ok((Vendor, false))` - Updated vendor, no transition to verified
pub(crate) async fn apply_check<C: ConnectionTrait>(
    db: &C,
    vendor: Vendor,
    check: VerificationCheck,
    value: bool,
) -> Result<(Vendor, bool), AppError> {
    let was_verified = vendor.is_verified();

    let mut checks = vendor.checks;
    checks.set(check, value);
    let status = checks.status(vendor.verification_status);

    let updated = VendorRepository::new(db)
        .save_verification(vendor.id, checks, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    let newly_verified = updated.is_verified() && !was_verified;
    if newly_verified {
        tracing::info!("Vendor {} is now verified", updated.id);
    }

    Ok((updated, newly_verified))
}

pub(crate) fn verified_notification(vendor: &Vendor) -> NewNotification {
    NewNotification::new(
        vendor.user_id,
        NotificationKind::Success,
        "Verification complete",
        "All verification checks passed. You can now apply for shops.",
    )
    .link("/stations")
}

fn normalize_profile(params: VendorProfileParams) -> Result<VendorProfileParams, AppError> {
    if params.annual_turnover < 0 {
        return Err(AppError::BadRequest(
            "Annual turnover cannot be negative".to_string(),
        ));
    }

    Ok(VendorProfileParams {
        business_name: validate::required_text("Business name", &params.business_name)?,
        business_type: validate::required_text("Business type", &params.business_type)?,
        owner_name: validate::required_text("Owner name", &params.owner_name)?,
        pan_number: validate::fixed_alphanumeric("PAN", &params.pan_number, 10)?,
        gst_number: validate::optional_text(params.gst_number).map(|g| g.to_uppercase()),
        bank_account_number: validate::required_text(
            "Bank account number",
            &params.bank_account_number,
        )?,
        ifsc_code: validate::fixed_alphanumeric("IFSC", &params.ifsc_code, 11)?,
        food_license_number: validate::optional_text(params.food_license_number),
        annual_turnover: params.annual_turnover,
        railway_declaration: params.railway_declaration,
    })
}
