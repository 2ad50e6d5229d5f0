//! Business logic layer.
//!
//! Services validate input, enforce the allocation workflow rules and coordinate
//! repositories, running multi-step changes inside a single database transaction.
//! They accept and return domain models from `server::model`; controllers convert
//! to and from DTOs. Notifications are delivered after the change they describe
//! has been committed.

pub mod admin;
pub mod agreement;
pub mod application;
pub mod auth;
pub mod dashboard;
pub mod document;
pub mod inspection;
pub mod layout;
pub mod license;
pub mod negotiation;
pub mod notification;
pub mod payment;
pub mod station;
pub mod upload;
pub mod vendor;

#[cfg(test)]
mod test;
