use crate::server::{data::layout::LayoutRepository, model::layout::ShopPlan};
use entity::sea_orm_active_enums::ShopStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_station;
mod shop_has_applications;
mod shops;

fn plan(shop_number: &str, x: f64) -> ShopPlan {
    ShopPlan {
        shop_number: shop_number.to_string(),
        x,
        y: 0.0,
        width: 4.0,
        height: 5.0,
        category: "Books".to_string(),
        base_rent: 8_000,
    }
}
