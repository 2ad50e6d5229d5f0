//! Role and station scoped access checks.
//!
//! `AuthGuard` resolves the current user from the session and checks a list of
//! `Permission`s against it. Checks that depend on a record the controller has not
//! loaded yet (for example the station of an application) are done in the service
//! layer with [`authorize`], which runs the same rules for an already resolved user.

use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tower_sessions::Session;

use crate::server::{
    data::{inspector::InspectorRepository, station::StationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    RailwayAdmin,
    Vendor,
    StationManager,
    Inspector,
    /// Station manager or railway admin.
    Staff,
    /// Manager assigned to the station, or railway admin.
    ManageStation(i32),
    /// Inspector assigned to the station, or railway admin.
    InspectStation(i32),
    /// Manager or inspector assigned to the station, or railway admin.
    ViewStation(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks each permission in order.
    ///
    /// An empty permission list only requires a logged in user, which lets accounts
    /// awaiting approval read their own status. Any permission additionally requires
    /// the account to be approved.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user passed every check
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session references a deleted user
    /// - `Err(AppError::AuthErr(AccountNotApproved | AccountRejected))` - Account not usable yet
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if permissions.is_empty() {
            return Ok(user);
        }

        ensure_usable(&user)?;

        for permission in permissions {
            authorize(self.db, &user, *permission).await?;
        }

        Ok(user)
    }

    /// Requires a logged in, approved user of any role.
    pub async fn require_approved(&self) -> Result<User, AppError> {
        let user = self.require(&[]).await?;
        ensure_usable(&user)?;
        Ok(user)
    }
}

/// Fails unless the account has been approved.
pub fn ensure_usable(user: &User) -> Result<(), AppError> {
    match user.status {
        AccountStatus::Approved => Ok(()),
        AccountStatus::Rejected => Err(AuthError::AccountRejected(user.id).into()),
        AccountStatus::Pending => Err(AuthError::AccountNotApproved(user.id).into()),
    }
}

/// Checks a single permission for an already resolved user.
pub async fn authorize<C: ConnectionTrait>(
    db: &C,
    user: &User,
    permission: Permission,
) -> Result<(), AppError> {
    let allowed = match permission {
        Permission::RailwayAdmin => user.role == UserRole::RailwayAdmin,
        Permission::Vendor => user.role == UserRole::Vendor,
        Permission::StationManager => user.role == UserRole::StationManager,
        Permission::Inspector => user.role == UserRole::Inspector,
        Permission::Staff => matches!(
            user.role,
            UserRole::StationManager | UserRole::RailwayAdmin
        ),
        Permission::ManageStation(station_id) => {
            user.role == UserRole::RailwayAdmin || manages(db, user, station_id).await?
        }
        Permission::InspectStation(station_id) => {
            user.role == UserRole::RailwayAdmin || inspects(db, user, station_id).await?
        }
        Permission::ViewStation(station_id) => {
            user.role == UserRole::RailwayAdmin
                || manages(db, user, station_id).await?
                || inspects(db, user, station_id).await?
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(user.id, format!("missing permission {:?}", permission)).into())
    }
}

async fn manages<C: ConnectionTrait>(db: &C, user: &User, station_id: i32) -> Result<bool, AppError> {
    if user.role != UserRole::StationManager {
        return Ok(false);
    }
    let station = StationRepository::new(db).find_by_id(station_id).await?;
    Ok(station.is_some_and(|s| s.manager_id == Some(user.id)))
}

async fn inspects<C: ConnectionTrait>(db: &C, user: &User, station_id: i32) -> Result<bool, AppError> {
    if user.role != UserRole::Inspector {
        return Ok(false);
    }
    let inspector = InspectorRepository::new(db).find_by_user(user.id).await?;
    Ok(inspector.is_some_and(|i| i.station_id == station_id))
}
