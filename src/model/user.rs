use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
    #[schema(value_type = String)]
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
    /// One-time code printed at startup, required to register a railway admin.
    pub admin_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateInspectorDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub badge_number: String,
    pub station_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InspectorDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub badge_number: String,
    pub station_id: i32,
    pub created_at: DateTime<Utc>,
}
