use crate::server::{
    data::application::ApplicationRepository, model::application::SubmitApplicationParams,
};
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_other_active_for_shop;
mod set_status;
