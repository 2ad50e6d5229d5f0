use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::UserRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "negotiation_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub sender_id: i32,
    pub sender_role: UserRole,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub offered_rent: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::negotiation_room::Entity",
        from = "Column::RoomId",
        to = "super::negotiation_room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    NegotiationRoom,
}

impl Related<super::negotiation_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NegotiationRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
