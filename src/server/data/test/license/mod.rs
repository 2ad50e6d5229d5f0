use crate::server::data::license::LicenseRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{ApplicationStatus, LicenseStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_with_prefix;
mod get_lapsed;
mod set_status;
