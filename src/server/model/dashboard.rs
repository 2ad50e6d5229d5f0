//! Role specific dashboard counters.

use entity::sea_orm_active_enums::VerificationStatus;

use crate::{
    model::dashboard::{
        AdminDashboardDto, ApplicationCountsDto, DashboardDto, InspectorDashboardDto,
        ManagerDashboardDto, VendorDashboardDto,
    },
    server::model::station::Station,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Vendor(VendorDashboard),
    StationManager(ManagerDashboard),
    Inspector(InspectorDashboard),
    RailwayAdmin(AdminDashboard),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplicationCounts {
    pub pending: u64,
    pub negotiating: u64,
    pub approved: u64,
    pub rejected: u64,
    pub withdrawn: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VendorDashboard {
    pub has_profile: bool,
    pub verification_percentage: u32,
    pub verification_status: Option<VerificationStatus>,
    pub applications: ApplicationCounts,
    pub active_licenses: u64,
    pub outstanding_amount: i64,
    pub unread_notifications: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManagerDashboard {
    pub station: Option<Station>,
    pub pending_applications: u64,
    pub occupied_shops: u64,
    pub total_shops: u64,
    pub active_licenses: u64,
    pub amount_collected: i64,
    pub overdue_payments: u64,
    pub unread_notifications: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectorDashboard {
    pub station: Option<Station>,
    pub inspections_logged: u64,
    pub inspections_this_month: u64,
    pub active_licenses_at_station: u64,
    pub unread_notifications: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub pending_managers: u64,
    pub stations: u64,
    pub vendors: u64,
    pub verified_vendors: u64,
    pub active_licenses: u64,
    pub total_collected: i64,
}

impl Dashboard {
    pub fn into_dto(self) -> DashboardDto {
        match self {
            Self::Vendor(d) => DashboardDto::Vendor(VendorDashboardDto {
                has_profile: d.has_profile,
                verification_percentage: d.verification_percentage,
                verification_status: d.verification_status,
                applications: ApplicationCountsDto {
                    pending: d.applications.pending,
                    negotiating: d.applications.negotiating,
                    approved: d.applications.approved,
                    rejected: d.applications.rejected,
                    withdrawn: d.applications.withdrawn,
                },
                active_licenses: d.active_licenses,
                outstanding_amount: d.outstanding_amount,
                unread_notifications: d.unread_notifications,
            }),
            Self::StationManager(d) => DashboardDto::StationManager(ManagerDashboardDto {
                station: d.station.map(Station::into_dto),
                pending_applications: d.pending_applications,
                occupied_shops: d.occupied_shops,
                total_shops: d.total_shops,
                active_licenses: d.active_licenses,
                amount_collected: d.amount_collected,
                overdue_payments: d.overdue_payments,
                unread_notifications: d.unread_notifications,
            }),
            Self::Inspector(d) => DashboardDto::Inspector(InspectorDashboardDto {
                station: d.station.map(Station::into_dto),
                inspections_logged: d.inspections_logged,
                inspections_this_month: d.inspections_this_month,
                active_licenses_at_station: d.active_licenses_at_station,
                unread_notifications: d.unread_notifications,
            }),
            Self::RailwayAdmin(d) => DashboardDto::RailwayAdmin(AdminDashboardDto {
                pending_managers: d.pending_managers,
                stations: d.stations,
                vendors: d.vendors,
                verified_vendors: d.verified_vendors,
                active_licenses: d.active_licenses,
                total_collected: d.total_collected,
            }),
        }
    }
}
