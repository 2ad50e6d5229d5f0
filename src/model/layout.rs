use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ShopStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ShopDto {
    pub id: i32,
    pub station_id: i32,
    pub shop_number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub category: String,
    pub base_rent: i64,
    #[schema(value_type = String)]
    pub status: ShopStatus,
    pub vendor_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LayoutDto {
    pub station_id: i32,
    pub width: f64,
    pub height: f64,
    pub total_area: f64,
    pub used_area: f64,
    /// Share of the layout covered by shops, between 0 and 1.
    pub coverage: f64,
    pub shops: Vec<ShopDto>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveShopDto {
    pub shop_number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub category: String,
    pub base_rent: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveLayoutDto {
    pub width: f64,
    pub height: f64,
    pub shops: Vec<SaveShopDto>,
}
