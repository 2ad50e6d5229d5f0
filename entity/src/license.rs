use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::LicenseStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "licenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub license_number: String,
    pub vendor_id: i32,
    pub station_id: i32,
    pub shop_id: i32,
    #[sea_orm(unique)]
    pub application_id: i32,
    pub monthly_rent: i64,
    pub status: LicenseStatus,
    pub issued_at: DateTimeUtc,
    pub valid_from: DateTimeUtc,
    pub valid_until: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub qr_code: String,
    pub revocation_reason: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::shop_application::Entity",
        from = "Column::ApplicationId",
        to = "super::shop_application::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ShopApplication,
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

impl Related<super::shop_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
