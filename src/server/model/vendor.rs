//! Vendor profile domain models and verification aggregation.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DocumentType, VerificationStatus};

use crate::model::vendor::{
    VendorDto, VendorProfileDto, VerificationCheckDto, VerificationChecksDto,
    VerificationSummaryDto,
};

/// Number of checks a vendor must pass to become verified.
pub const TOTAL_CHECKS: u32 = 7;

/// One of the seven verification checks on a vendor profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationCheck {
    Identity,
    Bank,
    Business,
    FoodLicense,
    Police,
    Financial,
    RailwayDeclaration,
}

impl VerificationCheck {
    /// The check a reviewed document of this type satisfies.
    pub fn for_document(doc_type: DocumentType) -> Self {
        match doc_type {
            DocumentType::IdentityProof => Self::Identity,
            DocumentType::BankStatement => Self::Bank,
            DocumentType::BusinessRegistration => Self::Business,
            DocumentType::FoodLicense => Self::FoodLicense,
            DocumentType::PoliceVerification => Self::Police,
            DocumentType::FinancialStatement => Self::Financial,
            DocumentType::RailwayDeclaration => Self::RailwayDeclaration,
        }
    }

    pub fn from_dto(dto: VerificationCheckDto) -> Self {
        match dto {
            VerificationCheckDto::Identity => Self::Identity,
            VerificationCheckDto::Bank => Self::Bank,
            VerificationCheckDto::Business => Self::Business,
            VerificationCheckDto::FoodLicense => Self::FoodLicense,
            VerificationCheckDto::Police => Self::Police,
            VerificationCheckDto::Financial => Self::Financial,
            VerificationCheckDto::RailwayDeclaration => Self::RailwayDeclaration,
        }
    }
}

/// State of the seven verification checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerificationChecks {
    pub identity: bool,
    pub bank: bool,
    pub business: bool,
    pub food_license: bool,
    pub police: bool,
    pub financial: bool,
    pub railway_declaration: bool,
}

impl VerificationChecks {
    pub fn set(&mut self, check: VerificationCheck, value: bool) {
        let flag = match check {
            VerificationCheck::Identity => &mut self.identity,
            VerificationCheck::Bank => &mut self.bank,
            VerificationCheck::Business => &mut self.business,
            VerificationCheck::FoodLicense => &mut self.food_license,
            VerificationCheck::Police => &mut self.police,
            VerificationCheck::Financial => &mut self.financial,
            VerificationCheck::RailwayDeclaration => &mut self.railway_declaration,
        };
        *flag = value;
    }

    pub fn completed(&self) -> u32 {
        [
            self.identity,
            self.bank,
            self.business,
            self.food_license,
            self.police,
            self.financial,
            self.railway_declaration,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count() as u32
    }

    /// Completed share as a whole percentage, rounded down.
    pub fn percentage(&self) -> u32 {
        self.completed() * 100 / TOTAL_CHECKS
    }

    /// Status implied by the checks. A rejected vendor stays rejected.
    pub fn status(&self, current: VerificationStatus) -> VerificationStatus {
        if current == VerificationStatus::Rejected {
            return current;
        }
        match self.completed() {
            0 => VerificationStatus::Pending,
            TOTAL_CHECKS => VerificationStatus::Verified,
            _ => VerificationStatus::InProgress,
        }
    }

    fn into_dto(self) -> VerificationChecksDto {
        VerificationChecksDto {
            identity: self.identity,
            bank: self.bank,
            business: self.business,
            food_license: self.food_license,
            police: self.police,
            financial: self.financial,
            railway_declaration: self.railway_declaration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: i32,
    pub user_id: i32,
    pub business_name: String,
    pub business_type: String,
    pub owner_name: String,
    pub pan_number: String,
    pub gst_number: Option<String>,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub food_license_number: Option<String>,
    pub annual_turnover: i64,
    pub railway_declaration: bool,
    pub checks: VerificationChecks,
    pub verification_status: VerificationStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn from_entity(entity: entity::vendor::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            business_name: entity.business_name,
            business_type: entity.business_type,
            owner_name: entity.owner_name,
            pan_number: entity.pan_number,
            gst_number: entity.gst_number,
            bank_account_number: entity.bank_account_number,
            ifsc_code: entity.ifsc_code,
            food_license_number: entity.food_license_number,
            annual_turnover: entity.annual_turnover,
            railway_declaration: entity.railway_declaration,
            checks: VerificationChecks {
                identity: entity.identity_verified,
                bank: entity.bank_verified,
                business: entity.business_verified,
                food_license: entity.food_license_verified,
                police: entity.police_verified,
                financial: entity.financial_verified,
                railway_declaration: entity.railway_declaration_verified,
            },
            verification_status: entity.verification_status,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    pub fn into_dto(self) -> VendorDto {
        VendorDto {
            id: self.id,
            user_id: self.user_id,
            business_name: self.business_name,
            business_type: self.business_type,
            owner_name: self.owner_name,
            pan_number: self.pan_number,
            gst_number: self.gst_number,
            bank_account_number: self.bank_account_number,
            ifsc_code: self.ifsc_code,
            food_license_number: self.food_license_number,
            annual_turnover: self.annual_turnover,
            railway_declaration: self.railway_declaration,
            verification: VerificationSummaryDto {
                completed: self.checks.completed(),
                total: TOTAL_CHECKS,
                percentage: self.checks.percentage(),
                status: self.verification_status,
            },
            checks: self.checks.into_dto(),
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Profile fields a vendor fills in, used for both create and update.
#[derive(Debug, Clone)]
pub struct VendorProfileParams {
    pub business_name: String,
    pub business_type: String,
    pub owner_name: String,
    pub pan_number: String,
    pub gst_number: Option<String>,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub food_license_number: Option<String>,
    pub annual_turnover: i64,
    pub railway_declaration: bool,
}

impl VendorProfileParams {
    pub fn from_dto(dto: VendorProfileDto) -> Self {
        Self {
            business_name: dto.business_name,
            business_type: dto.business_type,
            owner_name: dto.owner_name,
            pan_number: dto.pan_number,
            gst_number: dto.gst_number,
            bank_account_number: dto.bank_account_number,
            ifsc_code: dto.ifsc_code,
            food_license_number: dto.food_license_number,
            annual_turnover: dto.annual_turnover,
            railway_declaration: dto.railway_declaration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checks_are_pending() {
        let checks = VerificationChecks::default();
        assert_eq!(checks.completed(), 0);
        assert_eq!(checks.percentage(), 0);
        assert_eq!(
            checks.status(VerificationStatus::Pending),
            VerificationStatus::Pending
        );
    }

    #[test]
    fn partial_checks_are_in_progress_with_floored_percentage() {
        let mut checks = VerificationChecks::default();
        checks.set(VerificationCheck::Identity, true);
        checks.set(VerificationCheck::Bank, true);
        assert_eq!(checks.completed(), 2);
        // 200 / 7 = 28.57
        assert_eq!(checks.percentage(), 28);
        assert_eq!(
            checks.status(VerificationStatus::Pending),
            VerificationStatus::InProgress
        );
    }

    #[test]
    fn all_checks_verify() {
        let mut checks = VerificationChecks::default();
        for doc_type in [
            DocumentType::IdentityProof,
            DocumentType::BankStatement,
            DocumentType::BusinessRegistration,
            DocumentType::FoodLicense,
            DocumentType::PoliceVerification,
            DocumentType::FinancialStatement,
            DocumentType::RailwayDeclaration,
        ] {
            checks.set(VerificationCheck::for_document(doc_type), true);
        }
        assert_eq!(checks.percentage(), 100);
        assert_eq!(
            checks.status(VerificationStatus::InProgress),
            VerificationStatus::Verified
        );
    }

    #[test]
    fn unsetting_a_check_leaves_verified() {
        let mut checks = VerificationChecks {
            identity: true,
            bank: true,
            business: true,
            food_license: true,
            police: true,
            financial: true,
            railway_declaration: true,
        };
        checks.set(VerificationCheck::Police, false);
        assert_eq!(
            checks.status(VerificationStatus::Verified),
            VerificationStatus::InProgress
        );
    }

    #[test]
    fn rejected_status_is_kept() {
        let mut checks = VerificationChecks::default();
        checks.set(VerificationCheck::Identity, true);
        assert_eq!(
            checks.status(VerificationStatus::Rejected),
            VerificationStatus::Rejected
        );
    }
}
