use crate::server::{data::station::StationRepository, model::station::CreateStationParams};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_manager;
