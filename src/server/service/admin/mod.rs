//! Railway administration of accounts and inspectors.
//!
//! Lists accounts, decides on pending station manager registrations and creates
//! inspector accounts. The one-time code used to register the first railway admin
//! lives in [`code`].

pub mod code;

use entity::sea_orm_active_enums::{AccountStatus, NotificationKind, UserRole};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{inspector::InspectorRepository, station::StationRepository, user::UserRepository},
    error::AppError,
    model::{
        notification::NewNotification,
        total_pages,
        user::{CreateInspectorParams, CreateUserParams, Inspector, PaginatedUsers, User, UserFilter},
    },
    service::notification,
    util::{
        password::{hash_password, MIN_PASSWORD_LENGTH},
        validate,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of accounts, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional role and status to match
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of accounts per page
    pub async fn get_users(
        &self,
        filter: UserFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        validate::page(page, per_page)?;

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(filter, page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Approves a pending station manager registration.
    ///
    /// # Returns
    /// - `Ok(User)` - The approved manager
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::BadRequest)` - User is not a station manager
    pub async fn approve_manager(&self, user_id: i32) -> Result<User, AppError> {
        let user = decide_manager(self.db, user_id, AccountStatus::Approved).await?;

        tracing::info!("Approved station manager {}", user.id);

        notification::deliver(
            self.db,
            vec![NewNotification::new(
                user.id,
                NotificationKind::Success,
                "Account approved",
                "Your station manager account has been approved.",
            )
            .link("/dashboard")],
        )
        .await;

        Ok(user)
    }

    /// Rejects a station manager registration. The account can no longer log in
    /// and any station it was assigned to is left without a manager.
    pub async fn reject_manager(&self, user_id: i32) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let user = decide_manager(&txn, user_id, AccountStatus::Rejected).await?;
        let unassigned = StationRepository::new(&txn)
            .unassign_manager(user.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Rejected station manager {} and unassigned {} station(s)",
            user.id,
            unassigned
        );

        notification::deliver(
            self.db,
            vec![NewNotification::new(
                user.id,
                NotificationKind::Alert,
                "Account rejected",
                "Your station manager registration was rejected by the railway administration.",
            )],
        )
        .await;

        Ok(user)
    }

    /// Creates an inspector account and profile in one transaction.
    ///
    /// # Returns
    /// - `Ok(Inspector)` - The new inspector
    /// - `Err(AppError::BadRequest)` - Invalid fields or unknown station
    /// - `Err(AppError::Conflict)` - Email or badge number already in use
    pub async fn create_inspector(&self, params: CreateInspectorParams) -> Result<Inspector, AppError> {
        let name = validate::required_text("Name", &params.name)?;
        let email = validate::email(&params.email)?;
        let badge_number = validate::required_text("Badge number", &params.badge_number)?.to_uppercase();
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        if StationRepository::new(&txn)
            .find_by_id(params.station_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("Station does not exist".to_string()));
        }

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let inspector_repo = InspectorRepository::new(&txn);
        if inspector_repo.badge_exists(&badge_number).await? {
            return Err(AppError::Conflict("Badge number is already in use".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name,
                email,
                password_hash,
                phone: validate::optional_text(params.phone),
                role: UserRole::Inspector,
                status: AccountStatus::Approved,
            })
            .await?;
        let profile = inspector_repo
            .create(user.id, badge_number, params.station_id)
            .await?;

        txn.commit().await?;

        tracing::info!("Created inspector {} for station {}", user.id, profile.station_id);

        Ok(Inspector {
            id: profile.id,
            user_id: user.id,
            name: user.name,
            email: user.email,
            badge_number: profile.badge_number,
            station_id: profile.station_id,
            created_at: profile.created_at,
        })
    }

    pub async fn get_inspectors(&self) -> Result<Vec<Inspector>, AppError> {
        Ok(InspectorRepository::new(self.db).get_all().await?)
    }
}

async fn decide_manager<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    status: AccountStatus,
) -> Result<User, AppError> {
    let user_repo = UserRepository::new(db);

    let Some(user) = user_repo.find_by_id(user_id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };
    if user.role != UserRole::StationManager {
        return Err(AppError::BadRequest(
            "Only station manager accounts need approval".to_string(),
        ));
    }

    user_repo
        .set_status(user_id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
