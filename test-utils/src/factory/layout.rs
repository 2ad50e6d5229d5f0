//! Layout factory for creating station layouts and shop slots.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::ShopStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Creates a layout of the given dimensions for a station.
pub async fn create_layout(
    db: &DatabaseConnection,
    station_id: i32,
    width: f64,
    height: f64,
) -> Result<entity::station_layout::Model, DbErr> {
    entity::station_layout::ActiveModel {
        station_id: ActiveValue::Set(station_id),
        width: ActiveValue::Set(width),
        height: ActiveValue::Set(height),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating shop slots inside a layout.
///
/// Defaults to an available 4x5 shop at the layout origin renting for 10000.
pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    layout_id: i32,
    station_id: i32,
    shop_number: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    category: String,
    base_rent: i64,
    status: ShopStatus,
    vendor_id: Option<i32>,
}

impl<'a> ShopFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, layout: &entity::station_layout::Model) -> Self {
        Self {
            db,
            layout_id: layout.id,
            station_id: layout.station_id,
            shop_number: format!("S-{}", next_id()),
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 5.0,
            category: "Food".to_string(),
            base_rent: 10_000,
            status: ShopStatus::Available,
            vendor_id: None,
        }
    }

    pub fn shop_number(mut self, shop_number: impl Into<String>) -> Self {
        self.shop_number = shop_number.into();
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn base_rent(mut self, base_rent: i64) -> Self {
        self.base_rent = base_rent;
        self
    }

    pub fn status(mut self, status: ShopStatus) -> Self {
        self.status = status;
        self
    }

    pub fn vendor_id(mut self, vendor_id: i32) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }

    pub async fn build(self) -> Result<entity::layout_shop::Model, DbErr> {
        entity::layout_shop::ActiveModel {
            layout_id: ActiveValue::Set(self.layout_id),
            station_id: ActiveValue::Set(self.station_id),
            shop_number: ActiveValue::Set(self.shop_number),
            x: ActiveValue::Set(self.x),
            y: ActiveValue::Set(self.y),
            width: ActiveValue::Set(self.width),
            height: ActiveValue::Set(self.height),
            area: ActiveValue::Set(self.width * self.height),
            category: ActiveValue::Set(self.category),
            base_rent: ActiveValue::Set(self.base_rent),
            status: ActiveValue::Set(self.status),
            vendor_id: ActiveValue::Set(self.vendor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available shop with default dimensions.
pub async fn create_shop(
    db: &DatabaseConnection,
    layout: &entity::station_layout::Model,
) -> Result<entity::layout_shop::Model, DbErr> {
    ShopFactory::new(db, layout).build().await
}

/// Marks an existing shop as occupied by the given vendor.
pub async fn occupy_shop(
    db: &DatabaseConnection,
    shop: entity::layout_shop::Model,
    vendor_id: i32,
) -> Result<entity::layout_shop::Model, DbErr> {
    let mut active = shop.into_active_model();
    active.status = ActiveValue::Set(ShopStatus::Occupied);
    active.vendor_id = ActiveValue::Set(Some(vendor_id));
    active.update(db).await
}
