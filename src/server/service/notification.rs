//! User notifications.
//!
//! Other services call [`deliver`] once their change has been committed. Delivery
//! failures are logged and never undo the change that triggered them.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{NewNotification, Notification, PaginatedNotifications},
        total_pages,
    },
    util::validate,
};

/// Stores each notification, logging any that fail.
pub async fn deliver<C: ConnectionTrait>(db: &C, notifications: Vec<NewNotification>) {
    let repo = NotificationRepository::new(db);
    for notification in notifications {
        let user_id = notification.user_id;
        if let Err(e) = repo.create(notification).await {
            tracing::error!("Failed to notify user {}: {}", user_id, e);
        }
    }
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the user's notifications, newest first.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        validate::page(page, per_page)?;

        let (notifications, total) = NotificationRepository::new(self.db)
            .get_paginated(user_id, unread_only, page, per_page)
            .await?;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Updated notification
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }
}
