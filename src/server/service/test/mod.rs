use crate::server::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::{notification::Notification, user::User},
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod document;
mod inspection;
mod layout;
mod negotiation;
mod vendor;

/// Base URL embedded in license QR codes during tests.
const APP_URL: &str = "http://localhost:8080";

fn domain_user(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}

/// Every notification of a user, newest first.
async fn inbox(db: &DatabaseConnection, user_id: i32) -> Vec<Notification> {
    let (notifications, _) = NotificationRepository::new(db)
        .get_paginated(user_id, false, 0, 100)
        .await
        .unwrap();
    notifications
}
