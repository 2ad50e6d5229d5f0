//! Negotiation room and message repository.

use chrono::Utc;
use entity::sea_orm_active_enums::{NegotiationStatus, UserRole};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::negotiation::{NegotiationMessage, NegotiationRoom};

pub struct NegotiationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NegotiationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a room for an application.
    pub async fn create_room(
        &self,
        application_id: i32,
        vendor_user_id: i32,
        manager_user_id: i32,
    ) -> Result<entity::negotiation_room::Model, DbErr> {
        entity::negotiation_room::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            vendor_user_id: ActiveValue::Set(vendor_user_id),
            manager_user_id: ActiveValue::Set(manager_user_id),
            status: ActiveValue::Set(NegotiationStatus::Open),
            current_offer: ActiveValue::Set(None),
            last_offer_by: ActiveValue::Set(None),
            agreed_rent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_room_by_application(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::negotiation_room::Model>, DbErr> {
        entity::prelude::NegotiationRoom::find()
            .filter(entity::negotiation_room::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await
    }

    /// Loads a room with its thread in chronological order.
    pub async fn get_room_with_messages(
        &self,
        application_id: i32,
    ) -> Result<Option<NegotiationRoom>, DbErr> {
        let Some(room) = self.find_room_by_application(application_id).await? else {
            return Ok(None);
        };

        let messages = entity::prelude::NegotiationMessage::find()
            .filter(entity::negotiation_message::Column::RoomId.eq(room.id))
            .order_by_asc(entity::negotiation_message::Column::CreatedAt)
            .order_by_asc(entity::negotiation_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(NegotiationRoom::from_entity(room, messages)))
    }

    pub async fn add_message(
        &self,
        room_id: i32,
        sender_id: i32,
        sender_role: UserRole,
        content: String,
        offered_rent: Option<i64>,
    ) -> Result<NegotiationMessage, DbErr> {
        let entity = entity::negotiation_message::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            sender_id: ActiveValue::Set(sender_id),
            sender_role: ActiveValue::Set(sender_role),
            content: ActiveValue::Set(content),
            offered_rent: ActiveValue::Set(offered_rent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NegotiationMessage::from_entity(entity))
    }

    /// Records the latest offer and who made it.
    pub async fn set_offer(
        &self,
        room: entity::negotiation_room::Model,
        offer: i64,
        offered_by: i32,
    ) -> Result<entity::negotiation_room::Model, DbErr> {
        let mut active = room.into_active_model();
        active.current_offer = ActiveValue::Set(Some(offer));
        active.last_offer_by = ActiveValue::Set(Some(offered_by));
        active.update(self.db).await
    }

    /// Marks a room agreed at the given rent.
    pub async fn agree(
        &self,
        room: entity::negotiation_room::Model,
        rent: i64,
    ) -> Result<entity::negotiation_room::Model, DbErr> {
        let mut active = room.into_active_model();
        active.status = ActiveValue::Set(NegotiationStatus::Agreed);
        active.agreed_rent = ActiveValue::Set(Some(rent));
        active.update(self.db).await
    }

    /// Closes a room if it is still open. Agreed rooms keep their status.
    pub async fn close_for_application(&self, application_id: i32) -> Result<(), DbErr> {
        let Some(room) = self.find_room_by_application(application_id).await? else {
            return Ok(());
        };

        if room.status != NegotiationStatus::Open {
            return Ok(());
        }

        let mut active = room.into_active_model();
        active.status = ActiveValue::Set(NegotiationStatus::Closed);
        active.closed_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        Ok(())
    }
}
