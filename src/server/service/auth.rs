//! Account registration and password login.

use entity::sea_orm_active_enums::{AccountStatus, NotificationKind, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        notification::NewNotification,
        user::{CreateUserParams, RegisterParams, User},
    },
    service::{admin::code::AdminCodeService, notification},
    util::{
        password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
        validate,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_code_service: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_code_service: &'a AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
        }
    }

    /// Creates an account.
    ///
    /// Vendors are approved straight away. Station managers wait for a railway admin,
    /// who is notified. A railway admin account needs the one-time code logged at
    /// startup. Inspectors are only created by a railway admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Invalid name, email, password or role
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::AuthErr(AccessDenied))` - Missing or invalid admin code
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let name = validate::required_text("Name", &params.name)?;
        let email = validate::email(&params.email)?;
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let status = match params.role {
            UserRole::Vendor => AccountStatus::Approved,
            UserRole::StationManager => AccountStatus::Pending,
            UserRole::Inspector => {
                return Err(AppError::BadRequest(
                    "Inspector accounts are created by the railway administration".to_string(),
                ))
            }
            UserRole::RailwayAdmin => {
                let code = params.admin_code.as_deref().unwrap_or_default();
                if !self.admin_code_service.validate_and_consume(code).await {
                    return Err(AuthError::AccessDenied(
                        0,
                        format!("railway admin registration for {} without valid code", email),
                    )
                    .into());
                }
                AccountStatus::Approved
            }
        };

        let user = user_repo
            .create(CreateUserParams {
                name,
                email,
                password_hash: hash_password(&params.password)?,
                phone: validate::optional_text(params.phone),
                role: params.role,
                status,
            })
            .await?;

        tracing::info!("Registered user {} as {:?}", user.id, user.role);

        if user.role == UserRole::StationManager {
            let admins = user_repo.get_approved_by_role(UserRole::RailwayAdmin).await?;
            notification::deliver(
                self.db,
                admins
                    .into_iter()
                    .map(|admin| {
                        NewNotification::new(
                            admin.id,
                            NotificationKind::Info,
                            "Station manager awaiting approval",
                            format!("{} ({}) registered as a station manager.", user.name, user.email),
                        )
                        .link("/admin/users")
                    })
                    .collect(),
            )
            .await;
        }

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Pending accounts may log in so they can see their status; rejected accounts
    /// may not.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::AuthErr(AccountRejected))` - Account was rejected
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status == AccountStatus::Rejected {
            return Err(AuthError::AccountRejected(user.id).into());
        }

        Ok(user)
    }
}
