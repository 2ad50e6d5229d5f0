use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the caller is not logged in.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password at login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user lacks a permission required by the operation.
    ///
    /// # Fields
    /// - ID of the user
    /// - Description of what was denied, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The account is still waiting for railway admin approval.
    #[error("User {0} is not approved yet")]
    AccountNotApproved(i32),

    /// The account was rejected and can no longer log in.
    #[error("User {0} account was rejected")]
    AccountRejected(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AccountNotApproved` / `AccountRejected` → 403 Forbidden
///
/// Denials are logged at debug level with their detail while the client only sees a
/// generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::AccountNotApproved(_) => (
                StatusCode::FORBIDDEN,
                "Your account is awaiting approval by the railway administration",
            ),
            Self::AccountRejected(_) => (StatusCode::FORBIDDEN, "Your account has been rejected"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
