//! Station layout and shop repository.

use chrono::Utc;
use entity::sea_orm_active_enums::ShopStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::layout::{Layout, Shop, ShopPlan};

pub struct LayoutRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LayoutRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a station's layout with all shops ordered by shop number.
    ///
    /// # Returns
    /// - `Ok(Some(Layout))` - The station has a layout
    /// - `Ok(None)` - No layout saved yet
    pub async fn find_by_station(&self, station_id: i32) -> Result<Option<Layout>, DbErr> {
        let Some(layout) = entity::prelude::StationLayout::find()
            .filter(entity::station_layout::Column::StationId.eq(station_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let shops = layout
            .find_related(entity::prelude::LayoutShop)
            .order_by_asc(entity::layout_shop::Column::ShopNumber)
            .all(self.db)
            .await?;

        Ok(Some(Layout::from_entity(layout, shops)))
    }

    /// Creates the layout row for a station or updates its dimensions.
    pub async fn upsert_layout(
        &self,
        station_id: i32,
        width: f64,
        height: f64,
    ) -> Result<entity::station_layout::Model, DbErr> {
        let existing = entity::prelude::StationLayout::find()
            .filter(entity::station_layout::Column::StationId.eq(station_id))
            .one(self.db)
            .await?;

        match existing {
            Some(layout) => {
                let mut active = layout.into_active_model();
                active.width = ActiveValue::Set(width);
                active.height = ActiveValue::Set(height);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await
            }
            None => {
                entity::station_layout::ActiveModel {
                    station_id: ActiveValue::Set(station_id),
                    width: ActiveValue::Set(width),
                    height: ActiveValue::Set(height),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Inserts a new, available shop.
    pub async fn create_shop(
        &self,
        layout: &entity::station_layout::Model,
        plan: &ShopPlan,
    ) -> Result<Shop, DbErr> {
        let entity = entity::layout_shop::ActiveModel {
            layout_id: ActiveValue::Set(layout.id),
            station_id: ActiveValue::Set(layout.station_id),
            shop_number: ActiveValue::Set(plan.shop_number.clone()),
            x: ActiveValue::Set(plan.x),
            y: ActiveValue::Set(plan.y),
            width: ActiveValue::Set(plan.width),
            height: ActiveValue::Set(plan.height),
            area: ActiveValue::Set(plan.area()),
            category: ActiveValue::Set(plan.category.clone()),
            base_rent: ActiveValue::Set(plan.base_rent),
            status: ActiveValue::Set(ShopStatus::Available),
            vendor_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Shop::from_entity(entity))
    }

    /// Rewrites the geometry, category and rent of an existing shop. Status and
    /// vendor are untouched.
    pub async fn update_shop(&self, shop_id: i32, plan: &ShopPlan) -> Result<Option<Shop>, DbErr> {
        let Some(entity) = entity::prelude::LayoutShop::find_by_id(shop_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.x = ActiveValue::Set(plan.x);
        active.y = ActiveValue::Set(plan.y);
        active.width = ActiveValue::Set(plan.width);
        active.height = ActiveValue::Set(plan.height);
        active.area = ActiveValue::Set(plan.area());
        active.category = ActiveValue::Set(plan.category.clone());
        active.base_rent = ActiveValue::Set(plan.base_rent);
        let entity = active.update(self.db).await?;

        Ok(Some(Shop::from_entity(entity)))
    }

    pub async fn delete_shop(&self, shop_id: i32) -> Result<(), DbErr> {
        entity::prelude::LayoutShop::delete_by_id(shop_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn find_shop(&self, shop_id: i32) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::LayoutShop::find_by_id(shop_id)
            .one(self.db)
            .await?;
        Ok(entity.map(Shop::from_entity))
    }

    /// Sets a shop's allocation status and holder.
    pub async fn set_shop_status(
        &self,
        shop_id: i32,
        status: ShopStatus,
        vendor_id: Option<i32>,
    ) -> Result<Option<Shop>, DbErr> {
        let Some(entity) = entity::prelude::LayoutShop::find_by_id(shop_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.vendor_id = ActiveValue::Set(vendor_id);
        let entity = active.update(self.db).await?;

        Ok(Some(Shop::from_entity(entity)))
    }

    /// Lists a station's shops with the given status, ordered by shop number.
    pub async fn get_shops_by_status(
        &self,
        station_id: i32,
        status: ShopStatus,
    ) -> Result<Vec<Shop>, DbErr> {
        let entities = entity::prelude::LayoutShop::find()
            .filter(entity::layout_shop::Column::StationId.eq(station_id))
            .filter(entity::layout_shop::Column::Status.eq(status))
            .order_by_asc(entity::layout_shop::Column::ShopNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Shop::from_entity).collect())
    }

    /// Counts a station's shops, optionally only those with the given status.
    pub async fn count_shops(
        &self,
        station_id: i32,
        status: Option<ShopStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::LayoutShop::find()
            .filter(entity::layout_shop::Column::StationId.eq(station_id));
        if let Some(status) = status {
            query = query.filter(entity::layout_shop::Column::Status.eq(status));
        }
        query.count(self.db).await
    }

    /// Whether any application references the shop.
    pub async fn shop_has_applications(&self, shop_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::ShopId.eq(shop_id))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }
}
