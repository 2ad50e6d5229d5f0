//! Inspection logging by station inspectors.

use entity::sea_orm_active_enums::{InspectionResult, LicenseStatus, NotificationKind};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        inspection::InspectionRepository, inspector::InspectorRepository,
        license::LicenseRepository, station::StationRepository, vendor::VendorRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        inspection::{Inspection, LogInspectionParams, MAX_HYGIENE_RATING, MIN_HYGIENE_RATING},
        notification::NewNotification,
        user::User,
    },
    service::{license::LicenseService, notification},
    util::validate,
};

pub struct InspectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InspectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs an inspection of a license at the inspector's own station.
    ///
    /// A `WARNING` or `FAIL` result notifies the vendor and the station manager.
    ///
    /// # Returns
    /// - `Ok(Inspection)` - The logged inspection
    /// - `Err(AppError::NotFound)` - License missing
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller has no inspector profile or the license is at another station
    /// - `Err(AppError::BadRequest)` - License not active or suspended, rating out of range, or no remarks
    pub async fn log(&self, actor: &User, params: LogInspectionParams) -> Result<Inspection, AppError> {
        let Some(inspector) = InspectorRepository::new(self.db).find_by_user(actor.id).await? else {
            return Err(AuthError::AccessDenied(actor.id, "no inspector profile".to_string()).into());
        };

        let Some(license) = LicenseRepository::new(self.db)
            .find_by_id(params.license_id)
            .await?
        else {
            return Err(AppError::NotFound("License not found".to_string()));
        };
        if license.station_id != inspector.station_id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("inspect license {} at another station", license.id),
            )
            .into());
        }
        if !matches!(license.status, LicenseStatus::Active | LicenseStatus::Suspended) {
            return Err(AppError::BadRequest(
                "Only active or suspended licenses can be inspected".to_string(),
            ));
        }
        if !(MIN_HYGIENE_RATING..=MAX_HYGIENE_RATING).contains(&params.hygiene_rating) {
            return Err(AppError::BadRequest(format!(
                "Hygiene rating must be between {} and {}",
                MIN_HYGIENE_RATING, MAX_HYGIENE_RATING
            )));
        }

        let params = LogInspectionParams {
            remarks: validate::required_text("Remarks", &params.remarks)?,
            violations: validate::optional_text(params.violations),
            ..params
        };

        let inspection = InspectionRepository::new(self.db)
            .create(inspector.id, license.station_id, params)
            .await?;

        tracing::info!(
            "Inspector {} logged {:?} for license {}",
            inspector.id,
            inspection.result,
            license.license_number
        );

        if inspection.result != InspectionResult::Pass {
            let (kind, title) = match inspection.result {
                InspectionResult::Fail => (NotificationKind::Alert, "Inspection failed"),
                _ => (NotificationKind::Warning, "Inspection warning"),
            };
            let message = format!(
                "Inspection of license {} rated hygiene {}/{}: {}",
                license.license_number, inspection.hygiene_rating, MAX_HYGIENE_RATING, inspection.remarks
            );

            let mut recipients = Vec::new();
            if let Some(vendor) = VendorRepository::new(self.db).find_by_id(license.vendor_id).await? {
                recipients.push(vendor.user_id);
            }
            if let Some(manager_id) = StationRepository::new(self.db)
                .find_by_id(license.station_id)
                .await?
                .and_then(|s| s.manager_id)
            {
                recipients.push(manager_id);
            }

            notification::deliver(
                self.db,
                recipients
                    .into_iter()
                    .map(|user_id| {
                        NewNotification::new(user_id, kind, title, message.clone())
                            .link(format!("/licenses/{}", license.id))
                    })
                    .collect(),
            )
            .await;
        }

        Ok(inspection)
    }

    /// Lists inspections of a license for its holder or staff of its station.
    pub async fn get_by_license(&self, actor: &User, license_id: i32) -> Result<Vec<Inspection>, AppError> {
        LicenseService::new(self.db).get(actor, license_id).await?;
        Ok(InspectionRepository::new(self.db)
            .get_by_license(license_id)
            .await?)
    }

    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<Inspection>, AppError> {
        Ok(InspectionRepository::new(self.db)
            .get_by_station(station_id)
            .await?)
    }

    /// Lists inspections logged by the calling inspector.
    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<Inspection>, AppError> {
        let Some(inspector) = InspectorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(InspectionRepository::new(self.db)
            .get_by_inspector(inspector.id)
            .await?)
    }

    /// Lists inspections of every license held by the calling vendor.
    pub async fn get_for_vendor(&self, user_id: i32) -> Result<Vec<Inspection>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(InspectionRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?)
    }
}
