//! Station factory for creating test station entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    zone: String,
    city: String,
    platform_count: i32,
    manager_id: Option<i32>,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Station {id}"`
    /// - code: `"ST{id}"`
    /// - zone: `"Central"`, city: `"Mumbai"`, platform_count: `4`
    /// - manager_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Station {}", id),
            code: format!("ST{}", id),
            zone: "Central".to_string(),
            city: "Mumbai".to_string(),
            platform_count: 4,
            manager_id: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn manager_id(mut self, manager_id: i32) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Builds and inserts the station entity into the database.
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            zone: ActiveValue::Set(self.zone),
            city: ActiveValue::Set(self.city),
            platform_count: ActiveValue::Set(self.platform_count),
            manager_id: ActiveValue::Set(self.manager_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station without a manager.
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).build().await
}
