//! Role specific dashboard counters.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use entity::sea_orm_active_enums::{
    AccountStatus, ApplicationStatus, PaymentStatus, ShopStatus, UserRole, VerificationStatus,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        application::ApplicationRepository, inspection::InspectionRepository,
        inspector::InspectorRepository, layout::LayoutRepository, license::LicenseRepository,
        notification::NotificationRepository, payment::PaymentRepository,
        station::StationRepository, user::UserRepository, vendor::VendorRepository,
    },
    error::AppError,
    model::{
        dashboard::{
            AdminDashboard, ApplicationCounts, Dashboard, InspectorDashboard, ManagerDashboard,
            VendorDashboard,
        },
        payment::PaymentSummary,
        user::User,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the dashboard for the user's role.
    pub async fn get(&self, user: &User) -> Result<Dashboard, AppError> {
        self.get_at(user, Utc::now()).await
    }

    /// Builds the dashboard as of `now`, which sets the month for the inspector's
    /// monthly count.
    pub async fn get_at(&self, user: &User, now: DateTime<Utc>) -> Result<Dashboard, AppError> {
        let dashboard = match user.role {
            UserRole::Vendor => Dashboard::Vendor(self.vendor(user.id).await?),
            UserRole::StationManager => Dashboard::StationManager(self.manager(user.id).await?),
            UserRole::Inspector => Dashboard::Inspector(self.inspector(user.id, now).await?),
            UserRole::RailwayAdmin => Dashboard::RailwayAdmin(self.admin().await?),
        };
        Ok(dashboard)
    }

    async fn vendor(&self, user_id: i32) -> Result<VendorDashboard, AppError> {
        let unread_notifications = NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?;

        let Some(vendor) = VendorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(VendorDashboard {
                has_profile: false,
                verification_percentage: 0,
                verification_status: None,
                applications: ApplicationCounts::default(),
                active_licenses: 0,
                outstanding_amount: 0,
                unread_notifications,
            });
        };

        let application_repo = ApplicationRepository::new(self.db);
        let mut applications = ApplicationCounts::default();
        for (status, slot) in [
            (ApplicationStatus::Pending, &mut applications.pending),
            (ApplicationStatus::Negotiating, &mut applications.negotiating),
            (ApplicationStatus::Approved, &mut applications.approved),
            (ApplicationStatus::Rejected, &mut applications.rejected),
            (ApplicationStatus::Withdrawn, &mut applications.withdrawn),
        ] {
            *slot = application_repo
                .count_by_vendor_and_status(vendor.id, status)
                .await?;
        }

        let active_licenses = LicenseRepository::new(self.db)
            .count_active(None, Some(vendor.id))
            .await?;
        let payments = PaymentRepository::new(self.db)
            .get_by_vendor(vendor.id)
            .await?;

        Ok(VendorDashboard {
            has_profile: true,
            verification_percentage: vendor.checks.percentage(),
            verification_status: Some(vendor.verification_status),
            applications,
            active_licenses,
            outstanding_amount: PaymentSummary::from_payments(&payments).total_outstanding,
            unread_notifications,
        })
    }

    async fn manager(&self, user_id: i32) -> Result<ManagerDashboard, AppError> {
        let unread_notifications = NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?;

        let Some(station) = StationRepository::new(self.db).find_by_manager(user_id).await? else {
            return Ok(ManagerDashboard {
                station: None,
                pending_applications: 0,
                occupied_shops: 0,
                total_shops: 0,
                active_licenses: 0,
                amount_collected: 0,
                overdue_payments: 0,
                unread_notifications,
            });
        };

        let pending_applications = ApplicationRepository::new(self.db)
            .count_by_station_and_status(station.id, ApplicationStatus::Pending)
            .await?;
        let layout_repo = LayoutRepository::new(self.db);
        let occupied_shops = layout_repo
            .count_shops(station.id, Some(ShopStatus::Occupied))
            .await?;
        let total_shops = layout_repo.count_shops(station.id, None).await?;
        let active_licenses = LicenseRepository::new(self.db)
            .count_active(Some(station.id), None)
            .await?;
        let payments = PaymentRepository::new(self.db)
            .get_by_station(station.id)
            .await?;
        let summary = PaymentSummary::from_payments(&payments);

        Ok(ManagerDashboard {
            station: Some(station),
            pending_applications,
            occupied_shops,
            total_shops,
            active_licenses,
            amount_collected: summary.total_paid,
            overdue_payments: summary.overdue_count,
            unread_notifications,
        })
    }

    async fn inspector(&self, user_id: i32, now: DateTime<Utc>) -> Result<InspectorDashboard, AppError> {
        let unread_notifications = NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?;

        let Some(inspector) = InspectorRepository::new(self.db).find_by_user(user_id).await? else {
            return Ok(InspectorDashboard {
                station: None,
                inspections_logged: 0,
                inspections_this_month: 0,
                active_licenses_at_station: 0,
                unread_notifications,
            });
        };

        let inspection_repo = InspectionRepository::new(self.db);
        let inspections_logged = inspection_repo.count_by_inspector(inspector.id, None).await?;
        let inspections_this_month = inspection_repo
            .count_by_inspector(inspector.id, Some(start_of_month(now)))
            .await?;

        let station = StationRepository::new(self.db)
            .find_by_id(inspector.station_id)
            .await?;
        let active_licenses_at_station = LicenseRepository::new(self.db)
            .count_active(Some(inspector.station_id), None)
            .await?;

        Ok(InspectorDashboard {
            station,
            inspections_logged,
            inspections_this_month,
            active_licenses_at_station,
            unread_notifications,
        })
    }

    async fn admin(&self) -> Result<AdminDashboard, AppError> {
        let pending_managers = UserRepository::new(self.db)
            .count_by_role_and_status(UserRole::StationManager, AccountStatus::Pending)
            .await?;
        let stations = StationRepository::new(self.db).count().await?;
        let vendor_repo = VendorRepository::new(self.db);
        let vendors = vendor_repo.count(None).await?;
        let verified_vendors = vendor_repo.count(Some(VerificationStatus::Verified)).await?;
        let active_licenses = LicenseRepository::new(self.db)
            .count_active(None, None)
            .await?;
        let total_collected = PaymentRepository::new(self.db)
            .get_by_status(PaymentStatus::Paid)
            .await?
            .iter()
            .map(|p| p.amount)
            .sum();

        Ok(AdminDashboard {
            pending_managers,
            stations,
            vendors,
            verified_vendors,
            active_licenses,
            total_collected,
        })
    }
}

fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_month_truncates_to_first_midnight() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 13, 45, 7).unwrap();
        assert_eq!(
            start_of_month(now),
            Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
        );
    }
}
