//! License issue, lookup, public verification and status changes.
//!
//! Licenses are issued only as part of an application approval (see
//! [`issue`]). Afterwards a station manager can suspend and reinstate them, a
//! railway admin can revoke them, and the hourly sweep expires those past their
//! validity window. Revocation and expiry free the shop in the same transaction.

use chrono::{DateTime, Datelike, Utc};
use entity::sea_orm_active_enums::{LicenseStatus, NotificationKind, ShopStatus, UserRole};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        agreement::AgreementRepository, layout::LayoutRepository, license::LicenseRepository,
        station::StationRepository, vendor::VendorRepository,
    },
    error::AppError,
    middleware::auth::{authorize, Permission},
    model::{
        application::Application,
        license::{format_license_number, IssueLicenseParams, License, LicenseVerification},
        notification::NewNotification,
        station::Station,
        user::User,
    },
    service::notification,
    util::{
        date::add_months,
        qr::{svg_data_url, verification_url},
        validate,
    },
};

/// Issues the license for an approved application.
///
/// The number is `VV-{STATION_CODE}-{YYYY}-{NNNNNN}`, the serial counting up per
/// station and year. Validity starts now and runs for the application's duration.
/// The QR code points at the public verification page.
pub(crate) async fn issue<C: ConnectionTrait>(
    db: &C,
    app_url: &str,
    application: &Application,
    station: &Station,
    monthly_rent: i64,
    now: DateTime<Utc>,
) -> Result<License, AppError> {
    let repo = LicenseRepository::new(db);

    let year = now.year();
    let prefix = format!("VV-{}-{}-", station.code, year);
    let serial = repo.count_with_prefix(&prefix).await? + 1;
    let license_number = format_license_number(&station.code, year, serial as u32);

    let qr_code = svg_data_url(&verification_url(app_url, &license_number))?;
    let valid_until = add_months(now, application.duration_months)?;

    let license = repo
        .create(IssueLicenseParams {
            license_number,
            vendor_id: application.vendor_id,
            station_id: application.station_id,
            shop_id: application.shop_id,
            application_id: application.id,
            monthly_rent,
            valid_from: now,
            valid_until,
            qr_code,
        })
        .await?;

    tracing::info!(
        "Issued license {} for application {}",
        license.license_number,
        application.id
    );

    Ok(license)
}

pub struct LicenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a license for its holder, or staff of its station, or a railway admin.
    pub async fn get(&self, actor: &User, id: i32) -> Result<License, AppError> {
        let license = self.find(id).await?;
        self.ensure_can_view(actor, &license).await?;
        Ok(license)
    }

    /// Checks the actor holds the license or works at its station.
    pub(crate) async fn ensure_can_view(&self, actor: &User, license: &License) -> Result<(), AppError> {
        if actor.role == UserRole::Vendor {
            let vendor = VendorRepository::new(self.db).find_by_user(actor.id).await?;
            if vendor.is_some_and(|v| v.id == license.vendor_id) {
                return Ok(());
            }
        }
        authorize(self.db, actor, Permission::ViewStation(license.station_id)).await
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<License>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(LicenseRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?)
    }

    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<License>, AppError> {
        Ok(LicenseRepository::new(self.db)
            .get_by_station(station_id)
            .await?)
    }

    /// Looks up a license by number for the public verification page.
    ///
    /// `valid` is true only for an active license inside its validity window.
    pub async fn verify(&self, license_number: &str) -> Result<LicenseVerification, AppError> {
        let not_found = || AppError::NotFound("License not found".to_string());

        let license = LicenseRepository::new(self.db)
            .find_by_number(license_number.trim())
            .await?
            .ok_or_else(not_found)?;
        let vendor = VendorRepository::new(self.db)
            .find_by_id(license.vendor_id)
            .await?
            .ok_or_else(not_found)?;
        let station = StationRepository::new(self.db)
            .find_by_id(license.station_id)
            .await?
            .ok_or_else(not_found)?;
        let shop = LayoutRepository::new(self.db)
            .find_shop(license.shop_id)
            .await?
            .ok_or_else(not_found)?;

        Ok(LicenseVerification {
            valid: license.is_valid_at(Utc::now()),
            license,
            business_name: vendor.business_name,
            station_name: station.name,
            station_code: station.code,
            shop_number: shop.shop_number,
        })
    }

    /// Suspends an active license.
    pub async fn suspend(
        &self,
        actor: &User,
        id: i32,
        reason: Option<String>,
    ) -> Result<License, AppError> {
        let license = self.find(id).await?;
        authorize(self.db, actor, Permission::ManageStation(license.station_id)).await?;

        if license.status != LicenseStatus::Active {
            return Err(AppError::BadRequest(
                "Only active licenses can be suspended".to_string(),
            ));
        }

        let reason = validate::optional_text(reason);
        let license = self
            .set_status(id, LicenseStatus::Suspended, reason.clone())
            .await?;

        tracing::info!("Suspended license {}", license.license_number);

        let mut message = format!("License {} has been suspended.", license.license_number);
        if let Some(reason) = reason {
            message.push_str(&format!(" Reason: {}", reason));
        }
        self.notify_holder(&license, NotificationKind::Alert, "License suspended", message)
            .await;

        Ok(license)
    }

    /// Restores a suspended license to active.
    pub async fn reinstate(&self, actor: &User, id: i32) -> Result<License, AppError> {
        let license = self.find(id).await?;
        authorize(self.db, actor, Permission::ManageStation(license.station_id)).await?;

        if license.status != LicenseStatus::Suspended {
            return Err(AppError::BadRequest(
                "Only suspended licenses can be reinstated".to_string(),
            ));
        }

        let license = self.set_status(id, LicenseStatus::Active, None).await?;

        tracing::info!("Reinstated license {}", license.license_number);

        let message = format!("License {} is active again.", license.license_number);
        self.notify_holder(&license, NotificationKind::Success, "License reinstated", message)
            .await;

        Ok(license)
    }

    /// Revokes a license, freeing its shop and terminating its agreement.
    ///
    /// # Returns
    /// - `Ok(License)` - The revoked license
    /// - `Err(AppError::NotFound)` - No such license
    /// - `Err(AppError::BadRequest)` - License already revoked or expired
    pub async fn revoke(&self, id: i32, reason: &str) -> Result<License, AppError> {
        let reason = validate::required_text("Reason", reason)?;

        let txn = self.db.begin().await?;
        let repo = LicenseRepository::new(&txn);

        let Some(license) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("License not found".to_string()));
        };
        if !matches!(license.status, LicenseStatus::Active | LicenseStatus::Suspended) {
            return Err(AppError::BadRequest(
                "Only active or suspended licenses can be revoked".to_string(),
            ));
        }

        let license = repo
            .set_status(id, LicenseStatus::Revoked, Some(reason.clone()))
            .await?
            .ok_or_else(|| AppError::NotFound("License not found".to_string()))?;
        LayoutRepository::new(&txn)
            .set_shop_status(license.shop_id, ShopStatus::Available, None)
            .await?;
        AgreementRepository::new(&txn)
            .terminate_by_license(license.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Revoked license {}", license.license_number);

        let message = format!(
            "License {} has been revoked. Reason: {}",
            license.license_number, reason
        );
        self.notify_holder(&license, NotificationKind::Alert, "License revoked", message)
            .await;

        Ok(license)
    }

    /// Expires active and suspended licenses whose validity ended before `now`.
    ///
    /// Each license is expired in its own transaction together with freeing its
    /// shop, so one failure does not hold back the rest of the sweep.
    ///
    /// # Returns
    /// - `Ok(Vec<License>)` - Licenses expired by this sweep
    pub async fn expire_lapsed(&self, now: DateTime<Utc>) -> Result<Vec<License>, AppError> {
        let lapsed = LicenseRepository::new(self.db).get_lapsed(now).await?;

        let mut expired = Vec::with_capacity(lapsed.len());
        for license in lapsed {
            match self.expire(&license).await {
                Ok(license) => expired.push(license),
                Err(e) => tracing::error!("Failed to expire license {}: {}", license.id, e),
            }
        }

        for license in &expired {
            let message = format!(
                "License {} expired on {}.",
                license.license_number,
                license.valid_until.format("%Y-%m-%d")
            );
            self.notify_holder(license, NotificationKind::Warning, "License expired", message)
                .await;
        }

        if !expired.is_empty() {
            tracing::info!("Expired {} licenses", expired.len());
        }

        Ok(expired)
    }

    async fn expire(&self, license: &License) -> Result<License, AppError> {
        let txn = self.db.begin().await?;

        let expired = LicenseRepository::new(&txn)
            .set_status(license.id, LicenseStatus::Expired, None)
            .await?
            .ok_or_else(|| AppError::NotFound("License not found".to_string()))?;
        LayoutRepository::new(&txn)
            .set_shop_status(license.shop_id, ShopStatus::Available, None)
            .await?;

        txn.commit().await?;

        Ok(expired)
    }

    async fn find(&self, id: i32) -> Result<License, AppError> {
        LicenseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("License not found".to_string()))
    }

    async fn set_status(
        &self,
        id: i32,
        status: LicenseStatus,
        reason: Option<String>,
    ) -> Result<License, AppError> {
        LicenseRepository::new(self.db)
            .set_status(id, status, reason)
            .await?
            .ok_or_else(|| AppError::NotFound("License not found".to_string()))
    }

    /// Tells the license holder about a change. Failures are logged, the change
    /// itself has already been committed.
    async fn notify_holder(
        &self,
        license: &License,
        kind: NotificationKind,
        title: &str,
        message: String,
    ) {
        let vendor = match VendorRepository::new(self.db)
            .find_by_id(license.vendor_id)
            .await
        {
            Ok(Some(vendor)) => vendor,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(
                    "Failed to look up holder of license {}: {}",
                    license.license_number,
                    e
                );
                return;
            }
        };

        notification::deliver(
            self.db,
            vec![NewNotification::new(vendor.user_id, kind, title, message)
                .link(format!("/licenses/{}", license.id))],
        )
        .await;
    }
}
