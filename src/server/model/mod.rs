//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod agreement;
pub mod application;
pub mod dashboard;
pub mod document;
pub mod inspection;
pub mod layout;
pub mod license;
pub mod negotiation;
pub mod notification;
pub mod payment;
pub mod station;
pub mod user;
pub mod vendor;

/// Number of pages needed for `total` rows at `per_page` rows per page.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
