use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UserFilter},
};
use entity::sea_orm_active_enums::{AccountStatus, UserRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_all_paginated;
mod set_status;
