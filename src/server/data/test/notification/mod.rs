use crate::server::{
    data::notification::NotificationRepository, model::notification::NewNotification,
};
use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod mark_read;

fn info(user_id: i32, title: &str) -> NewNotification {
    NewNotification::new(user_id, NotificationKind::Info, title, "Body")
}
