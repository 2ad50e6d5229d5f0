use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ApplicationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shop_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    pub proposed_rent: i64,
    pub final_rent: Option<i64>,
    pub duration_months: i32,
    #[sea_orm(column_type = "Text")]
    pub business_plan: String,
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub submitted_at: DateTimeUtc,
    pub decided_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Station,
    #[sea_orm(
        belongs_to = "super::layout_shop::Entity",
        from = "Column::ShopId",
        to = "super::layout_shop::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    LayoutShop,
    #[sea_orm(has_one = "super::negotiation_room::Entity")]
    NegotiationRoom,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::layout_shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LayoutShop.def()
    }
}

impl Related<super::negotiation_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NegotiationRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
