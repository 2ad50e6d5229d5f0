use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ShopStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "layout_shops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub layout_id: i32,
    pub station_id: i32,
    pub shop_number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub category: String,
    pub base_rent: i64,
    pub status: ShopStatus,
    pub vendor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station_layout::Entity",
        from = "Column::LayoutId",
        to = "super::station_layout::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    StationLayout,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Vendor,
}

impl Related<super::station_layout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationLayout.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
