//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, lookups, approval status changes and the admin listing, converting
//! entity models into domain models at the infrastructure boundary.

use chrono::Utc;
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User, UserFilter};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an account by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds an account by its normalized (lowercase) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any approved railway admin exists.
    ///
    /// Used at startup to decide whether a one-time admin registration code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one railway admin exists
    /// - `Ok(false)` - No railway admin exists (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::RailwayAdmin))
            .filter(entity::user::Column::Status.eq(AccountStatus::Approved))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Lists all approved accounts with the given role.
    pub async fn get_approved_by_role(&self, role: UserRole) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .filter(entity::user::Column::Status.eq(AccountStatus::Approved))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets a page of accounts, newest first, with optional role and status filters.
    ///
    /// # Arguments
    /// - `filter` - Optional role and status to match
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of accounts per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Accounts for the page and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        filter: UserFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::user::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }

    /// Sets the approval status of an account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: AccountStatus) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Counts accounts with the given role and status.
    pub async fn count_by_role_and_status(
        &self,
        role: UserRole,
        status: AccountStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .filter(entity::user::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
