//! Vendor payment domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, PaymentType};

use crate::model::payment::{CreatePaymentDto, PaymentDto, PaymentSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub vendor_id: i32,
    pub license_id: i32,
    pub payment_type: PaymentType,
    pub amount: i64,
    pub period: Option<String>,
    pub due_date: DateTime<Utc>,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub transaction_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::vendor_payment::Model) -> Self {
        Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            license_id: entity.license_id,
            payment_type: entity.payment_type,
            amount: entity.amount,
            period: entity.period,
            due_date: entity.due_date,
            status: entity.status,
            paid_at: entity.paid_at,
            transaction_ref: entity.transaction_ref,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            vendor_id: self.vendor_id,
            license_id: self.license_id,
            payment_type: self.payment_type,
            amount: self.amount,
            period: self.period,
            due_date: self.due_date,
            status: self.status,
            paid_at: self.paid_at,
            transaction_ref: self.transaction_ref,
            created_at: self.created_at,
        }
    }
}

/// Fields for inserting a due.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub vendor_id: i32,
    pub license_id: i32,
    pub payment_type: PaymentType,
    pub amount: i64,
    pub period: Option<String>,
    pub due_date: DateTime<Utc>,
}

/// Request from a manager to raise a due against a license.
#[derive(Debug, Clone)]
pub struct RaiseDueParams {
    pub license_id: i32,
    pub payment_type: PaymentType,
    pub amount: i64,
    pub period: Option<String>,
    pub due_date: DateTime<Utc>,
}

impl RaiseDueParams {
    pub fn from_dto(dto: CreatePaymentDto) -> Self {
        Self {
            license_id: dto.license_id,
            payment_type: dto.payment_type,
            amount: dto.amount,
            period: dto.period,
            due_date: dto.due_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentSummary {
    pub total_paid: i64,
    pub total_outstanding: i64,
    pub overdue_count: u64,
}

impl PaymentSummary {
    /// Totals a vendor's dues.
    pub fn from_payments(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut acc, p| {
            match p.status {
                PaymentStatus::Paid => acc.total_paid += p.amount,
                PaymentStatus::Pending => acc.total_outstanding += p.amount,
                PaymentStatus::Overdue => {
                    acc.total_outstanding += p.amount;
                    acc.overdue_count += 1;
                }
            }
            acc
        })
    }

    pub fn into_dto(self) -> PaymentSummaryDto {
        PaymentSummaryDto {
            total_paid: self.total_paid,
            total_outstanding: self.total_outstanding,
            overdue_count: self.overdue_count,
        }
    }
}

/// Checks a billing period looks like `YYYY-MM`.
pub fn is_valid_period(period: &str) -> bool {
    let Some((year, month)) = period.split_once('-') else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && month.len() == 2
        && matches!(month.parse::<u32>(), Ok(1..=12))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(status: PaymentStatus, amount: i64) -> Payment {
        let now = Utc::now();
        Payment {
            id: 1,
            vendor_id: 1,
            license_id: 1,
            payment_type: PaymentType::Rent,
            amount,
            period: None,
            due_date: now,
            status,
            paid_at: None,
            transaction_ref: None,
            created_at: now,
        }
    }

    #[test]
    fn summarizes_payments() {
        let summary = PaymentSummary::from_payments(&[
            payment(PaymentStatus::Paid, 30_000),
            payment(PaymentStatus::Pending, 10_000),
            payment(PaymentStatus::Overdue, 10_000),
        ]);
        assert_eq!(summary.total_paid, 30_000);
        assert_eq!(summary.total_outstanding, 20_000);
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn validates_period() {
        assert!(is_valid_period("2026-01"));
        assert!(!is_valid_period("2026-13"));
        assert!(!is_valid_period("26-01"));
        assert!(!is_valid_period("2026/01"));
    }
}
