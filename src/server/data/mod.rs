//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every repository is
//! generic over `ConnectionTrait` so the same methods run against the pool or inside a
//! transaction.

pub mod agreement;
pub mod application;
pub mod document;
pub mod inspection;
pub mod inspector;
pub mod layout;
pub mod license;
pub mod negotiation;
pub mod notification;
pub mod payment;
pub mod station;
pub mod user;
pub mod vendor;

#[cfg(test)]
mod test;
