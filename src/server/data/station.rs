//! Station data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::station::{CreateStationParams, Station, UpdateStationParams};

pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a station. The code must already be normalized.
    pub async fn create(&self, param: CreateStationParams) -> Result<Station, DbErr> {
        let entity = entity::station::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            zone: ActiveValue::Set(param.zone),
            city: ActiveValue::Set(param.city),
            platform_count: ActiveValue::Set(param.platform_count),
            manager_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Station>, DbErr> {
        let entity = entity::prelude::Station::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Station::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Station>, DbErr> {
        let entity = entity::prelude::Station::find()
            .filter(entity::station::Column::Code.eq(code))
            .one(self.db)
            .await?;
        Ok(entity.map(Station::from_entity))
    }

    /// Finds the station a manager is assigned to.
    pub async fn find_by_manager(&self, manager_id: i32) -> Result<Option<Station>, DbErr> {
        let entity = entity::prelude::Station::find()
            .filter(entity::station::Column::ManagerId.eq(manager_id))
            .one(self.db)
            .await?;
        Ok(entity.map(Station::from_entity))
    }

    /// Gets a page of stations ordered by name.
    ///
    /// # Returns
    /// - `Ok((stations, total))` - Stations for the page and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Station>, u64), DbErr> {
        let paginator = entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Name)
            .order_by_asc(entity::station::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Station::from_entity).collect(), total))
    }

    /// Updates the descriptive fields of a station.
    ///
    /// # Returns
    /// - `Ok(Some(Station))` - Updated station
    /// - `Ok(None)` - No station with that ID
    pub async fn update(&self, param: UpdateStationParams) -> Result<Option<Station>, DbErr> {
        let Some(entity) = entity::prelude::Station::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.zone = ActiveValue::Set(param.zone);
        active.city = ActiveValue::Set(param.city);
        active.platform_count = ActiveValue::Set(param.platform_count);
        let entity = active.update(self.db).await?;

        Ok(Some(Station::from_entity(entity)))
    }

    /// Assigns a manager to a station, unassigning them from any other station first.
    ///
    /// # Returns
    /// - `Ok(Some(Station))` - Station with the new manager
    /// - `Ok(None)` - No station with that ID
    pub async fn set_manager(
        &self,
        station_id: i32,
        manager_id: i32,
    ) -> Result<Option<Station>, DbErr> {
        let Some(entity) = entity::prelude::Station::find_by_id(station_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let previous = entity::prelude::Station::find()
            .filter(entity::station::Column::ManagerId.eq(manager_id))
            .filter(entity::station::Column::Id.ne(station_id))
            .all(self.db)
            .await?;
        for other in previous {
            let mut active = other.into_active_model();
            active.manager_id = ActiveValue::Set(None);
            active.update(self.db).await?;
        }

        let mut active = entity.into_active_model();
        active.manager_id = ActiveValue::Set(Some(manager_id));
        let entity = active.update(self.db).await?;

        Ok(Some(Station::from_entity(entity)))
    }

    /// Removes the manager from every station they manage.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of stations left without a manager
    pub async fn unassign_manager(&self, manager_id: i32) -> Result<u64, DbErr> {
        let stations = entity::prelude::Station::find()
            .filter(entity::station::Column::ManagerId.eq(manager_id))
            .all(self.db)
            .await?;

        let count = stations.len() as u64;
        for station in stations {
            let mut active = station.into_active_model();
            active.manager_id = ActiveValue::Set(None);
            active.update(self.db).await?;
        }

        Ok(count)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Station::find().count(self.db).await
    }
}
