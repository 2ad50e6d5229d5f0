use entity::sea_orm_active_enums::VerificationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::station::StationDto;

/// Role specific dashboard counters, tagged by `role`.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardDto {
    Vendor(VendorDashboardDto),
    StationManager(ManagerDashboardDto),
    Inspector(InspectorDashboardDto),
    RailwayAdmin(AdminDashboardDto),
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApplicationCountsDto {
    pub pending: u64,
    pub negotiating: u64,
    pub approved: u64,
    pub rejected: u64,
    pub withdrawn: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VendorDashboardDto {
    pub has_profile: bool,
    pub verification_percentage: u32,
    #[schema(value_type = Option<String>)]
    pub verification_status: Option<VerificationStatus>,
    pub applications: ApplicationCountsDto,
    pub active_licenses: u64,
    pub outstanding_amount: i64,
    pub unread_notifications: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ManagerDashboardDto {
    pub station: Option<StationDto>,
    pub pending_applications: u64,
    pub occupied_shops: u64,
    pub total_shops: u64,
    pub active_licenses: u64,
    pub amount_collected: i64,
    pub overdue_payments: u64,
    pub unread_notifications: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InspectorDashboardDto {
    pub station: Option<StationDto>,
    pub inspections_logged: u64,
    pub inspections_this_month: u64,
    pub active_licenses_at_station: u64,
    pub unread_notifications: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub pending_managers: u64,
    pub stations: u64,
    pub vendors: u64,
    pub verified_vendors: u64,
    pub active_licenses: u64,
    pub total_collected: i64,
}
