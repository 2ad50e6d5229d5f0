use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::NegotiationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "negotiation_rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub application_id: i32,
    /// User id of the vendor taking part in the negotiation.
    pub vendor_user_id: i32,
    /// User id of the station manager taking part in the negotiation.
    pub manager_user_id: i32,
    pub status: NegotiationStatus,
    pub current_offer: Option<i64>,
    pub last_offer_by: Option<i32>,
    pub agreed_rent: Option<i64>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shop_application::Entity",
        from = "Column::ApplicationId",
        to = "super::shop_application::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ShopApplication,
    #[sea_orm(has_many = "super::negotiation_message::Entity")]
    NegotiationMessage,
}

impl Related<super::shop_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopApplication.def()
    }
}

impl Related<super::negotiation_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NegotiationMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
