//! Vendor agreements created at approval.

use entity::sea_orm_active_enums::{AgreementStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{agreement::AgreementRepository, vendor::VendorRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, Permission},
    model::{agreement::Agreement, user::User},
};

pub struct AgreementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgreementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an agreement for its vendor, staff of its station or a railway admin.
    pub async fn get(&self, actor: &User, id: i32) -> Result<Agreement, AppError> {
        let agreement = self.find(id).await?;

        if actor.role == UserRole::Vendor && self.owns(actor.id, &agreement).await? {
            return Ok(agreement);
        }
        authorize(self.db, actor, Permission::ViewStation(agreement.station_id)).await?;

        Ok(agreement)
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<Agreement>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(AgreementRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?)
    }

    /// Signs an agreement awaiting the vendor's signature.
    ///
    /// # Returns
    /// - `Ok(Agreement)` - The signed agreement
    /// - `Err(AppError::NotFound)` - No such agreement
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the agreement's vendor
    /// - `Err(AppError::BadRequest)` - Agreement already signed or terminated
    pub async fn sign(&self, user_id: i32, id: i32) -> Result<Agreement, AppError> {
        let agreement = self.find(id).await?;

        if !self.owns(user_id, &agreement).await? {
            return Err(AuthError::AccessDenied(user_id, format!("sign agreement {}", id)).into());
        }
        if agreement.status != AgreementStatus::PendingSignature {
            return Err(AppError::BadRequest(
                "Agreement is not awaiting signature".to_string(),
            ));
        }

        let agreement = AgreementRepository::new(self.db)
            .sign(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agreement not found".to_string()))?;

        tracing::info!("Agreement {} signed", id);

        Ok(agreement)
    }

    async fn owns(&self, user_id: i32, agreement: &Agreement) -> Result<bool, AppError> {
        let vendor = VendorRepository::new(self.db).find_by_user(user_id).await?;
        Ok(vendor.is_some_and(|v| v.id == agreement.vendor_id))
    }

    async fn find(&self, id: i32) -> Result<Agreement, AppError> {
        AgreementRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agreement not found".to_string()))
    }
}
