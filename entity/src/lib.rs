//! SeaORM entity definitions for VendorVault.
//!
//! Each module maps one database table. Status and role columns are stored as
//! strings and exposed as the enums in [`sea_orm_active_enums`].

pub mod prelude;

pub mod document;
pub mod inspection;
pub mod inspector;
pub mod layout_shop;
pub mod license;
pub mod negotiation_message;
pub mod negotiation_room;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod shop_application;
pub mod station;
pub mod station_layout;
pub mod user;
pub mod vendor;
pub mod vendor_agreement;
pub mod vendor_payment;
