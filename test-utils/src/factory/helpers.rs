//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entity chains
//! (station with manager and shop, verified vendor, issued license).

use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an approved station manager, a station they manage, a 50x20 layout and
/// one available 4x5 shop renting for 10000.
///
/// # Returns
/// - `Ok((manager, station, layout, shop))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_station_with_shop(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::station::Model,
        entity::station_layout::Model,
        entity::layout_shop::Model,
    ),
    DbErr,
> {
    let manager = crate::factory::user::UserFactory::new(db)
        .role(UserRole::StationManager)
        .status(AccountStatus::Approved)
        .build()
        .await?;
    let station = crate::factory::station::StationFactory::new(db)
        .manager_id(manager.id)
        .build()
        .await?;
    let layout = crate::factory::layout::create_layout(db, station.id, 50.0, 20.0).await?;
    let shop = crate::factory::layout::create_shop(db, &layout).await?;

    Ok((manager, station, layout, shop))
}

/// Creates a vendor user with a fully verified vendor profile.
///
/// # Returns
/// - `Ok((user, vendor))` - The vendor's user account and profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_verified_vendor_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::vendor::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let vendor = crate::factory::vendor::create_verified_vendor(db, user.id).await?;

    Ok((user, vendor))
}

/// Creates an active license together with everything it depends on.
///
/// Builds a station with manager and shop, a verified vendor, an approved
/// application, marks the shop occupied and issues a 12 month license.
///
/// # Returns
/// - `Ok((manager, station, shop, vendor_user, vendor, license))`
/// - `Err(DbErr)` - Database error during creation
#[allow(clippy::type_complexity)]
pub async fn create_license_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::station::Model,
        entity::layout_shop::Model,
        entity::user::Model,
        entity::vendor::Model,
        entity::license::Model,
    ),
    DbErr,
> {
    let (manager, station, _layout, shop) = create_station_with_shop(db).await?;
    let (vendor_user, vendor) = create_verified_vendor_user(db).await?;
    let application = crate::factory::shop_application::ShopApplicationFactory::new(
        db, vendor.id, station.id, shop.id,
    )
    .status(entity::sea_orm_active_enums::ApplicationStatus::Approved)
    .build()
    .await?;
    let shop = crate::factory::layout::occupy_shop(db, shop, vendor.id).await?;
    let license =
        crate::factory::license::LicenseFactory::new(db, &application).build().await?;

    Ok((manager, station, shop, vendor_user, vendor, license))
}
