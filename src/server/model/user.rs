//! User domain models and parameters.
//!
//! Provides domain models for application accounts with their role and approval
//! state, plus parameter types for registration and admin listings.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};

use crate::model::user::{
    CreateInspectorDto, InspectorDto, PaginatedUsersDto, RegisterDto, UserDto,
};

/// Application account.
///
/// The password hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_approved(&self) -> bool {
        self.status == AccountStatus::Approved
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone: entity.phone,
            role: entity.role,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub admin_code: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            role: dto.role,
            admin_code: dto.admin_code,
        }
    }
}

/// Parameters for inserting a user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: AccountStatus,
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub status: Option<AccountStatus>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Inspector profile joined with its user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspector {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub badge_number: String,
    pub station_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Inspector {
    pub fn from_entity(entity: entity::inspector::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: user.name,
            email: user.email,
            badge_number: entity.badge_number,
            station_id: entity.station_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> InspectorDto {
        InspectorDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            badge_number: self.badge_number,
            station_id: self.station_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an inspector account and profile.
#[derive(Debug, Clone)]
pub struct CreateInspectorParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub badge_number: String,
    pub station_id: i32,
}

impl CreateInspectorParams {
    pub fn from_dto(dto: CreateInspectorDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            badge_number: dto.badge_number,
            station_id: dto.station_id,
        }
    }
}
