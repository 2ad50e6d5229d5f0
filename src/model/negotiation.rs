use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NegotiationStatus, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct NegotiationMessageDto {
    pub id: i32,
    pub sender_id: i32,
    #[schema(value_type = String)]
    pub sender_role: UserRole,
    pub content: String,
    pub offered_rent: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NegotiationRoomDto {
    pub id: i32,
    pub application_id: i32,
    pub vendor_user_id: i32,
    pub manager_user_id: i32,
    #[schema(value_type = String)]
    pub status: NegotiationStatus,
    pub current_offer: Option<i64>,
    pub last_offer_by: Option<i32>,
    pub agreed_rent: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub messages: Vec<NegotiationMessageDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PostMessageDto {
    pub content: String,
    pub offered_rent: Option<i64>,
}
