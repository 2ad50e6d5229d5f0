//! Shop application domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;

use crate::model::application::{ApplicationDto, SubmitApplicationDto};

/// Shortest license term an application may ask for.
pub const MIN_DURATION_MONTHS: i32 = 1;
/// Longest license term an application may ask for.
pub const MAX_DURATION_MONTHS: i32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub proposed_rent: i64,
    pub final_rent: Option<i64>,
    pub duration_months: i32,
    pub business_plan: String,
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl Application {
    pub fn from_entity(entity: entity::shop_application::Model) -> Self {
        Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            station_id: entity.station_id,
            shop_id: entity.shop_id,
            proposed_rent: entity.proposed_rent,
            final_rent: entity.final_rent,
            duration_months: entity.duration_months,
            business_plan: entity.business_plan,
            status: entity.status,
            rejection_reason: entity.rejection_reason,
            submitted_at: entity.submitted_at,
            decided_at: entity.decided_at,
        }
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            vendor_id: self.vendor_id,
            station_id: self.station_id,
            shop_id: self.shop_id,
            proposed_rent: self.proposed_rent,
            final_rent: self.final_rent,
            duration_months: self.duration_months,
            business_plan: self.business_plan,
            status: self.status,
            rejection_reason: self.rejection_reason,
            submitted_at: self.submitted_at,
            decided_at: self.decided_at,
        }
    }

    /// Pending or under negotiation.
    pub fn is_active(&self) -> bool {
        is_active_status(self.status)
    }
}

pub fn is_active_status(status: ApplicationStatus) -> bool {
    matches!(
        status,
        ApplicationStatus::Pending | ApplicationStatus::Negotiating
    )
}

#[derive(Debug, Clone)]
pub struct SubmitApplicationParams {
    pub station_id: i32,
    pub shop_id: i32,
    pub proposed_rent: i64,
    pub duration_months: i32,
    pub business_plan: String,
}

impl SubmitApplicationParams {
    pub fn from_dto(dto: SubmitApplicationDto) -> Self {
        Self {
            station_id: dto.station_id,
            shop_id: dto.shop_id,
            proposed_rent: dto.proposed_rent,
            duration_months: dto.duration_months,
            business_plan: dto.business_plan,
        }
    }
}

/// Records written by a successful approval.
#[derive(Debug, Clone)]
pub struct Approval {
    pub application: Application,
    pub license: crate::server::model::license::License,
    pub agreement: crate::server::model::agreement::Agreement,
    pub payments: Vec<crate::server::model::payment::Payment>,
}

impl Approval {
    pub fn into_dto(self) -> crate::model::application::ApprovalDto {
        crate::model::application::ApprovalDto {
            application: self.application.into_dto(),
            license: self.license.into_dto(),
            agreement: self.agreement.into_dto(),
            payments: self.payments.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}
