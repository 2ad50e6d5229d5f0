//! Request and response bodies of the JSON API.
//!
//! These types are the wire format. The server converts them into domain parameters
//! on the way in and builds them from domain models on the way out.

pub mod agreement;
pub mod api;
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
