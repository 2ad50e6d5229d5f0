//! Inspector factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an approved inspector user and profile assigned to the station.
///
/// # Returns
/// - `Ok((user, inspector))` - The inspector's user account and profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_inspector(
    db: &DatabaseConnection,
    station_id: i32,
) -> Result<(entity::user::Model, entity::inspector::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role(UserRole::Inspector)
        .build()
        .await?;

    let inspector = entity::inspector::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        badge_number: ActiveValue::Set(format!("INS-{}", next_id())),
        station_id: ActiveValue::Set(station_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((user, inspector))
}
