//! Shop applications and the approval workflow.
//!
//! An application moves from `PENDING` through optional `NEGOTIATING` to one of
//! `APPROVED`, `REJECTED` or `WITHDRAWN`. Approval allocates the shop and writes the
//! license, agreement and initial dues in a single transaction.

use chrono::Utc;
use entity::sea_orm_active_enums::{
    ApplicationStatus, NegotiationStatus, NotificationKind, PaymentType, ShopStatus, UserRole,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        agreement::AgreementRepository, application::ApplicationRepository,
        layout::LayoutRepository, negotiation::NegotiationRepository,
        payment::PaymentRepository, station::StationRepository, vendor::VendorRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, Permission},
    model::{
        agreement::{standard_terms, CreateAgreementParams, SECURITY_DEPOSIT_MONTHS},
        application::{
            Application, Approval, SubmitApplicationParams, MAX_DURATION_MONTHS,
            MIN_DURATION_MONTHS,
        },
        notification::NewNotification,
        payment::CreatePaymentParams,
        user::User,
    },
    service::{license, notification},
    util::{date::billing_period, validate},
};

/// Reason recorded on competing applications when a shop is allocated.
const SHOP_ALLOCATED_REASON: &str = "Shop has been allocated to another applicant";

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application for an available shop.
    ///
    /// # Returns
    /// - `Ok(Application)` - The pending application
    /// - `Err(AppError::BadRequest)` - Vendor not verified, invalid fields, or shop not at station
    /// - `Err(AppError::NotFound)` - Shop missing
    /// - `Err(AppError::Conflict)` - Shop not available, or vendor already has an active application for it
    pub async fn submit(
        &self,
        user_id: i32,
        params: SubmitApplicationParams,
    ) -> Result<Application, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Err(AppError::BadRequest(
                "Create a vendor profile before applying".to_string(),
            ));
        };
        if !vendor.is_verified() {
            return Err(AppError::BadRequest(
                "Only verified vendors can apply for shops".to_string(),
            ));
        }

        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&params.duration_months) {
            return Err(AppError::BadRequest(format!(
                "Duration must be between {} and {} months",
                MIN_DURATION_MONTHS, MAX_DURATION_MONTHS
            )));
        }
        let params = SubmitApplicationParams {
            proposed_rent: validate::positive_amount("Proposed rent", params.proposed_rent)?,
            business_plan: validate::required_text("Business plan", &params.business_plan)?,
            ..params
        };

        let Some(shop) = LayoutRepository::new(self.db).find_shop(params.shop_id).await? else {
            return Err(AppError::NotFound("Shop not found".to_string()));
        };
        if shop.station_id != params.station_id {
            return Err(AppError::BadRequest(
                "Shop does not belong to this station".to_string(),
            ));
        }
        if shop.status != ShopStatus::Available {
            return Err(AppError::Conflict("Shop is not available".to_string()));
        }

        let repo = ApplicationRepository::new(self.db);
        if repo.has_active_for_shop(vendor.id, shop.id).await? {
            return Err(AppError::Conflict(
                "You already have an open application for this shop".to_string(),
            ));
        }

        let application = repo.create(vendor.id, params).await?;
        tracing::info!(
            "Vendor {} applied for shop {} (application {})",
            vendor.id,
            shop.id,
            application.id
        );

        let station = StationRepository::new(self.db)
            .find_by_id(application.station_id)
            .await?;
        if let Some(manager_id) = station.and_then(|s| s.manager_id) {
            notification::deliver(
                self.db,
                vec![NewNotification::new(
                    manager_id,
                    NotificationKind::Info,
                    "New shop application",
                    format!(
                        "{} applied for shop {} at Rs. {} per month.",
                        vendor.business_name, shop.shop_number, application.proposed_rent
                    ),
                )
                .link(format!("/applications/{}", application.id))],
            )
            .await;
        }

        Ok(application)
    }

    pub async fn get_mine(
        &self,
        user_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(ApplicationRepository::new(self.db)
            .get_by_vendor(vendor.id, status)
            .await?)
    }

    pub async fn get_by_station(
        &self,
        station_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .get_by_station(station_id, status)
            .await?)
    }

    /// Gets an application for its vendor, the station's manager or a railway admin.
    pub async fn get(&self, actor: &User, id: i32) -> Result<Application, AppError> {
        let application = self.find(id).await?;

        if actor.role == UserRole::Vendor {
            let vendor = VendorRepository::new(self.db).find_by_user(actor.id).await?;
            if vendor.is_some_and(|v| v.id == application.vendor_id) {
                return Ok(application);
            }
        }
        authorize(
            self.db,
            actor,
            Permission::ManageStation(application.station_id),
        )
        .await?;

        Ok(application)
    }

    /// Withdraws the caller's own active application and closes its negotiation.
    pub async fn withdraw(&self, user_id: i32, id: i32) -> Result<Application, AppError> {
        let txn = self.db.begin().await?;

        let repo = ApplicationRepository::new(&txn);
        let Some(application) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Application not found".to_string()));
        };

        let vendor = VendorRepository::new(&txn).find_by_user(user_id).await?;
        if !vendor.is_some_and(|v| v.id == application.vendor_id) {
            return Err(AuthError::AccessDenied(user_id, format!("withdraw application {}", id)).into());
        }
        if !application.is_active() {
            return Err(AppError::BadRequest(
                "Only pending or negotiating applications can be withdrawn".to_string(),
            ));
        }

        let application = repo
            .set_status(id, ApplicationStatus::Withdrawn, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        NegotiationRepository::new(&txn)
            .close_for_application(id)
            .await?;

        txn.commit().await?;

        tracing::info!("Application {} withdrawn", id);

        Ok(application)
    }

    /// Moves a pending application into negotiation and opens its room.
    pub async fn start_negotiation(&self, actor: &User, id: i32) -> Result<Application, AppError> {
        let txn = self.db.begin().await?;

        let repo = ApplicationRepository::new(&txn);
        let Some(application) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Application not found".to_string()));
        };
        authorize(&txn, actor, Permission::ManageStation(application.station_id)).await?;

        if application.status != ApplicationStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending applications can go to negotiation".to_string(),
            ));
        }

        let Some(vendor) = VendorRepository::new(&txn)
            .find_by_id(application.vendor_id)
            .await?
        else {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        };

        let application = repo
            .set_status(id, ApplicationStatus::Negotiating, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        NegotiationRepository::new(&txn)
            .create_room(id, vendor.user_id, actor.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Negotiation opened for application {}", id);

        notification::deliver(
            self.db,
            vec![NewNotification::new(
                vendor.user_id,
                NotificationKind::Info,
                "Negotiation started",
                "The station manager opened a rent negotiation for your application.",
            )
            .link(format!("/applications/{}/negotiation", id))],
        )
        .await;

        Ok(application)
    }

    /// Rejects an active application and closes its negotiation.
    pub async fn reject(&self, actor: &User, id: i32, reason: &str) -> Result<Application, AppError> {
        let reason = validate::required_text("Reason", reason)?;

        let txn = self.db.begin().await?;

        let repo = ApplicationRepository::new(&txn);
        let Some(application) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Application not found".to_string()));
        };
        authorize(&txn, actor, Permission::ManageStation(application.station_id)).await?;

        if !application.is_active() {
            return Err(AppError::BadRequest(
                "Only pending or negotiating applications can be rejected".to_string(),
            ));
        }

        let application = repo
            .set_status(id, ApplicationStatus::Rejected, Some(reason.clone()))
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        NegotiationRepository::new(&txn)
            .close_for_application(id)
            .await?;
        let vendor = VendorRepository::new(&txn)
            .find_by_id(application.vendor_id)
            .await?;

        txn.commit().await?;

        tracing::info!("Application {} rejected", id);

        if let Some(vendor) = vendor {
            notification::deliver(
                self.db,
                vec![NewNotification::new(
                    vendor.user_id,
                    NotificationKind::Alert,
                    "Application rejected",
                    format!("Your shop application was rejected: {}", reason),
                )
                .link(format!("/applications/{}", id))],
            )
            .await;
        }

        Ok(application)
    }

    /// Approves an application and allocates the shop.
    ///
    /// The monthly rent is the negotiated rent when the room reached agreement,
    /// otherwise the proposed rent. In one transaction the application is approved,
    /// the shop is occupied by the vendor, competing applications are rejected, and
    /// the license, agreement, security deposit and first month's rent are created.
    ///
    /// # Arguments
    /// - `actor` - Manager of the application's station, or a railway admin
    /// - `id` - Application to approve
    /// - `app_url` - Public base URL embedded in the license QR code
    ///
    /// # Returns
    /// - `Ok(Approval)` - Every record written by the approval
    /// - `Err(AppError::NotFound)` - Application, shop, vendor or station missing
    /// - `Err(AppError::BadRequest)` - Application not pending or negotiating
    /// - `Err(AppError::Conflict)` - Shop no longer available
    pub async fn approve(&self, actor: &User, id: i32, app_url: &str) -> Result<Approval, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let application_repo = ApplicationRepository::new(&txn);
        let layout_repo = LayoutRepository::new(&txn);
        let negotiation_repo = NegotiationRepository::new(&txn);
        let vendor_repo = VendorRepository::new(&txn);

        let Some(application) = application_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Application not found".to_string()));
        };
        authorize(&txn, actor, Permission::ManageStation(application.station_id)).await?;

        if !application.is_active() {
            return Err(AppError::BadRequest(
                "Only pending or negotiating applications can be approved".to_string(),
            ));
        }

        let Some(shop) = layout_repo.find_shop(application.shop_id).await? else {
            return Err(AppError::NotFound("Shop not found".to_string()));
        };
        if shop.status != ShopStatus::Available {
            return Err(AppError::Conflict("Shop is no longer available".to_string()));
        }
        let Some(vendor) = vendor_repo.find_by_id(application.vendor_id).await? else {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        };
        let Some(station) = StationRepository::new(&txn)
            .find_by_id(application.station_id)
            .await?
        else {
            return Err(AppError::NotFound("Station not found".to_string()));
        };

        let agreed_rent = negotiation_repo
            .find_room_by_application(id)
            .await?
            .filter(|room| room.status == NegotiationStatus::Agreed)
            .and_then(|room| room.agreed_rent);
        let monthly_rent = agreed_rent.unwrap_or(application.proposed_rent);

        application_repo.set_final_rent(id, monthly_rent).await?;
        let application = application_repo
            .set_status(id, ApplicationStatus::Approved, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;
        negotiation_repo.close_for_application(id).await?;

        layout_repo
            .set_shop_status(shop.id, ShopStatus::Occupied, Some(vendor.id))
            .await?;

        let mut notifications = Vec::new();
        for other in application_repo
            .get_other_active_for_shop(shop.id, id)
            .await?
        {
            application_repo
                .set_status(
                    other.id,
                    ApplicationStatus::Rejected,
                    Some(SHOP_ALLOCATED_REASON.to_string()),
                )
                .await?;
            negotiation_repo.close_for_application(other.id).await?;
            if let Some(other_vendor) = vendor_repo.find_by_id(other.vendor_id).await? {
                notifications.push(
                    NewNotification::new(
                        other_vendor.user_id,
                        NotificationKind::Alert,
                        "Application rejected",
                        format!("Shop {}: {}.", shop.shop_number, SHOP_ALLOCATED_REASON),
                    )
                    .link(format!("/applications/{}", other.id)),
                );
            }
        }

        let license = license::issue(&txn, app_url, &application, &station, monthly_rent, now).await?;

        let agreement = AgreementRepository::new(&txn)
            .create(CreateAgreementParams {
                application_id: application.id,
                license_id: license.id,
                vendor_id: vendor.id,
                station_id: station.id,
                monthly_rent,
                start_date: license.valid_from,
                end_date: license.valid_until,
                terms: standard_terms(
                    &vendor.business_name,
                    &station.name,
                    &shop.shop_number,
                    monthly_rent,
                    application.duration_months,
                ),
            })
            .await?;

        let payment_repo = PaymentRepository::new(&txn);
        let deposit = payment_repo
            .create(CreatePaymentParams {
                vendor_id: vendor.id,
                license_id: license.id,
                payment_type: PaymentType::SecurityDeposit,
                amount: monthly_rent * SECURITY_DEPOSIT_MONTHS,
                period: None,
                due_date: license.valid_from,
            })
            .await?;
        let first_rent = payment_repo
            .create(CreatePaymentParams {
                vendor_id: vendor.id,
                license_id: license.id,
                payment_type: PaymentType::Rent,
                amount: monthly_rent,
                period: Some(billing_period(license.valid_from)),
                due_date: license.valid_from,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Application {} approved: shop {} allocated to vendor {} under license {}",
            id,
            shop.id,
            vendor.id,
            license.license_number
        );

        notifications.insert(
            0,
            NewNotification::new(
                vendor.user_id,
                NotificationKind::Success,
                "Application approved",
                format!(
                    "Shop {} at {} is yours. License {} has been issued; please sign your agreement.",
                    shop.shop_number, station.name, license.license_number
                ),
            )
            .link(format!("/agreements/{}", agreement.id)),
        );
        notification::deliver(self.db, notifications).await;

        Ok(Approval {
            application,
            license,
            agreement,
            payments: vec![deposit, first_rent],
        })
    }

    async fn find(&self, id: i32) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }
}
