//! HTTP handlers, one module per resource.
//!
//! Handlers check access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into domain parameters, call a service and convert the result
//! back into a response DTO.

pub mod admin;
pub mod agreement;
pub mod application;
pub mod auth;
pub mod dashboard;
pub mod document;
pub mod inspection;
pub mod license;
pub mod negotiation;
pub mod notification;
pub mod payment;
pub mod station;
pub mod vendor;

use serde::Deserialize;

/// Page selection for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
