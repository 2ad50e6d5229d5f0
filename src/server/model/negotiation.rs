//! Negotiation room domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NegotiationStatus, UserRole};

use crate::model::negotiation::{NegotiationMessageDto, NegotiationRoomDto};

/// Longest message accepted in a negotiation thread.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationMessage {
    pub id: i32,
    pub room_id: i32,
    pub sender_id: i32,
    pub sender_role: UserRole,
    pub content: String,
    pub offered_rent: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl NegotiationMessage {
    pub fn from_entity(entity: entity::negotiation_message::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            sender_id: entity.sender_id,
            sender_role: entity.sender_role,
            content: entity.content,
            offered_rent: entity.offered_rent,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NegotiationMessageDto {
        NegotiationMessageDto {
            id: self.id,
            sender_id: self.sender_id,
            sender_role: self.sender_role,
            content: self.content,
            offered_rent: self.offered_rent,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NegotiationRoom {
    pub id: i32,
    pub application_id: i32,
    pub vendor_user_id: i32,
    pub manager_user_id: i32,
    pub status: NegotiationStatus,
    pub current_offer: Option<i64>,
    pub last_offer_by: Option<i32>,
    pub agreed_rent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub messages: Vec<NegotiationMessage>,
}

impl NegotiationRoom {
    pub fn from_entity(
        entity: entity::negotiation_room::Model,
        messages: Vec<entity::negotiation_message::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            application_id: entity.application_id,
            vendor_user_id: entity.vendor_user_id,
            manager_user_id: entity.manager_user_id,
            status: entity.status,
            current_offer: entity.current_offer,
            last_offer_by: entity.last_offer_by,
            agreed_rent: entity.agreed_rent,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            messages: messages
                .into_iter()
                .map(NegotiationMessage::from_entity)
                .collect(),
        }
    }

    pub fn is_participant(&self, user_id: i32) -> bool {
        self.vendor_user_id == user_id || self.manager_user_id == user_id
    }

    pub fn into_dto(self) -> NegotiationRoomDto {
        NegotiationRoomDto {
            id: self.id,
            application_id: self.application_id,
            vendor_user_id: self.vendor_user_id,
            manager_user_id: self.manager_user_id,
            status: self.status,
            current_offer: self.current_offer,
            last_offer_by: self.last_offer_by,
            agreed_rent: self.agreed_rent,
            created_at: self.created_at,
            closed_at: self.closed_at,
            messages: self
                .messages
                .into_iter()
                .map(NegotiationMessage::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostMessageParams {
    pub application_id: i32,
    pub content: String,
    pub offered_rent: Option<i64>,
}
