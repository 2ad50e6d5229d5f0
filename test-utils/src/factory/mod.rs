//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories do not
//! create their parents; use the `helpers` module when a test needs a whole chain.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::user::UserFactory::new(db)
//!     .role(UserRole::StationManager)
//!     .build()
//!     .await?;
//! let station = factory::station::StationFactory::new(db)
//!     .manager_id(manager.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - User accounts of any role
//! - `station` - Stations, optionally with a manager
//! - `layout` - Station layouts and shop slots
//! - `vendor` - Vendor profiles, pending or fully verified
//! - `shop_application` - Shop applications
//! - `license` - Issued licenses
//! - `inspector` - Inspector profiles
//! - `inspection` - Logged inspections
//! - `payment` - Dues raised against a license
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod inspection;
pub mod inspector;
pub mod layout;
pub mod license;
pub mod payment;
pub mod shop_application;
pub mod station;
pub mod user;
pub mod vendor;

pub use layout::{create_layout, create_shop};
pub use station::create_station;
pub use user::create_user;
pub use vendor::{create_vendor, create_verified_vendor};
