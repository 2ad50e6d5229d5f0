//! Vendor dues: raising, paying, listing and the overdue sweep.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationKind, PaymentStatus, PaymentType};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{license::LicenseRepository, payment::PaymentRepository, vendor::VendorRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, Permission},
    model::{
        notification::NewNotification,
        payment::{is_valid_period, CreatePaymentParams, Payment, PaymentSummary, RaiseDueParams},
        user::User,
    },
    service::{license::LicenseService, notification},
    util::validate,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises a due against a license and notifies its holder.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The pending due
    /// - `Err(AppError::NotFound)` - License missing
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller does not manage the license's station
    /// - `Err(AppError::BadRequest)` - Amount not positive or period not `YYYY-MM`
    pub async fn create_due(&self, actor: &User, params: RaiseDueParams) -> Result<Payment, AppError> {
        let Some(license) = LicenseRepository::new(self.db)
            .find_by_id(params.license_id)
            .await?
        else {
            return Err(AppError::NotFound("License not found".to_string()));
        };
        authorize(self.db, actor, Permission::ManageStation(license.station_id)).await?;

        let amount = validate::positive_amount("Amount", params.amount)?;
        let period = validate::optional_text(params.period);
        if let Some(period) = &period {
            if !is_valid_period(period) {
                return Err(AppError::BadRequest(
                    "Period must be in YYYY-MM format".to_string(),
                ));
            }
        }

        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParams {
                vendor_id: license.vendor_id,
                license_id: license.id,
                payment_type: params.payment_type,
                amount,
                period,
                due_date: params.due_date,
            })
            .await?;

        tracing::info!(
            "Raised {:?} due of Rs. {} on license {}",
            payment.payment_type,
            payment.amount,
            license.license_number
        );

        if let Some(vendor) = VendorRepository::new(self.db).find_by_id(license.vendor_id).await? {
            let message = format!(
                "A {} of Rs. {} is due on {} for license {}.",
                payment_type_label(payment.payment_type),
                payment.amount,
                payment.due_date.format("%Y-%m-%d"),
                license.license_number
            );
            notification::deliver(
                self.db,
                vec![NewNotification::new(
                    vendor.user_id,
                    NotificationKind::Info,
                    "New payment due",
                    message,
                )
                .link("/payments")],
            )
            .await;
        }

        Ok(payment)
    }

    /// Marks one of the caller's dues paid.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The paid due
    /// - `Err(AppError::NotFound)` - No such due
    /// - `Err(AppError::AuthErr(AccessDenied))` - Due belongs to another vendor
    /// - `Err(AppError::BadRequest)` - Already paid or no transaction reference
    pub async fn pay(&self, user_id: i32, id: i32, transaction_ref: &str) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);
        let Some(payment) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Payment not found".to_string()));
        };

        let vendor = VendorRepository::new(self.db).find_by_user(user_id).await?;
        if !vendor.is_some_and(|v| v.id == payment.vendor_id) {
            return Err(AuthError::AccessDenied(user_id, format!("pay due {}", id)).into());
        }
        if payment.status == PaymentStatus::Paid {
            return Err(AppError::BadRequest("Payment is already paid".to_string()));
        }

        let transaction_ref = validate::required_text("Transaction reference", transaction_ref)?;
        let payment = repo
            .mark_paid(id, transaction_ref)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        tracing::info!("Payment {} paid by vendor {}", payment.id, payment.vendor_id);

        Ok(payment)
    }

    pub async fn get_mine(&self, user_id: i32) -> Result<Vec<Payment>, AppError> {
        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };
        Ok(PaymentRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?)
    }

    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .get_by_station(station_id)
            .await?)
    }

    /// Lists dues of a license for its holder or staff of its station.
    pub async fn get_by_license(&self, actor: &User, license_id: i32) -> Result<Vec<Payment>, AppError> {
        LicenseService::new(self.db).get(actor, license_id).await?;
        Ok(PaymentRepository::new(self.db)
            .get_by_license(license_id)
            .await?)
    }

    /// Totals a vendor's dues.
    pub async fn summary(&self, vendor_id: i32) -> Result<PaymentSummary, AppError> {
        let payments = PaymentRepository::new(self.db)
            .get_by_vendor(vendor_id)
            .await?;
        Ok(PaymentSummary::from_payments(&payments))
    }

    /// Totals the calling vendor's dues, empty when they have no profile.
    pub async fn summary_for_user(&self, user_id: i32) -> Result<PaymentSummary, AppError> {
        match VendorRepository::new(self.db).find_by_user(user_id).await? {
            Some(vendor) => self.summary(vendor.id).await,
            None => Ok(PaymentSummary::default()),
        }
    }

    /// Flags pending dues past their due date as overdue and notifies each vendor.
    pub async fn mark_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Payment>, AppError> {
        let flagged = PaymentRepository::new(self.db).mark_overdue(now).await?;
        if flagged.is_empty() {
            return Ok(flagged);
        }

        tracing::info!("Flagged {} dues as overdue", flagged.len());

        let vendor_repo = VendorRepository::new(self.db);
        let mut notifications = Vec::with_capacity(flagged.len());
        for payment in &flagged {
            let Some(vendor) = vendor_repo.find_by_id(payment.vendor_id).await? else {
                continue;
            };
            let message = format!(
                "Your {} of Rs. {} was due on {} and is now overdue.",
                payment_type_label(payment.payment_type),
                payment.amount,
                payment.due_date.format("%Y-%m-%d")
            );
            notifications.push(
                NewNotification::new(vendor.user_id, NotificationKind::Alert, "Payment overdue", message)
                    .link("/payments"),
            );
        }
        notification::deliver(self.db, notifications).await;

        Ok(flagged)
    }
}

fn payment_type_label(payment_type: PaymentType) -> &'static str {
    match payment_type {
        PaymentType::SecurityDeposit => "security deposit",
        PaymentType::Rent => "rent",
        PaymentType::Penalty => "penalty",
    }
}
