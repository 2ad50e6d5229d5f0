//! Inspector profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::Inspector;

pub struct InspectorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InspectorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an inspector profile for an existing inspector account.
    pub async fn create(
        &self,
        user_id: i32,
        badge_number: String,
        station_id: i32,
    ) -> Result<entity::inspector::Model, DbErr> {
        entity::inspector::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            badge_number: ActiveValue::Set(badge_number),
            station_id: ActiveValue::Set(station_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<entity::inspector::Model>, DbErr> {
        entity::prelude::Inspector::find()
            .filter(entity::inspector::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn badge_exists(&self, badge_number: &str) -> Result<bool, DbErr> {
        let found = entity::prelude::Inspector::find()
            .filter(entity::inspector::Column::BadgeNumber.eq(badge_number))
            .one(self.db)
            .await?;
        Ok(found.is_some())
    }

    /// Lists every inspector with their account details.
    pub async fn get_all(&self) -> Result<Vec<Inspector>, DbErr> {
        let rows = entity::prelude::Inspector::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::inspector::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(inspector, user)| user.map(|u| Inspector::from_entity(inspector, u)))
            .collect())
    }
}
