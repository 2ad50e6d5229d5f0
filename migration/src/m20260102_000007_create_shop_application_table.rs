use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_station_table::Station,
    m20260101_000004_create_vendor_table::Vendor,
    m20260101_000005_create_layout_shop_table::LayoutShop,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopApplication::Id))
                    .col(integer(ShopApplication::VendorId))
                    .col(integer(ShopApplication::StationId))
                    .col(integer(ShopApplication::ShopId))
                    .col(big_integer(ShopApplication::ProposedRent))
                    .col(big_integer_null(ShopApplication::FinalRent))
                    .col(integer(ShopApplication::DurationMonths))
                    .col(text(ShopApplication::BusinessPlan))
                    .col(string_len(ShopApplication::Status, 32))
                    .col(string_null(ShopApplication::RejectionReason))
                    .col(
                        timestamp_with_time_zone(ShopApplication::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(ShopApplication::DecidedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_application_vendor_id")
                            .from(ShopApplication::Table, ShopApplication::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_application_station_id")
                            .from(ShopApplication::Table, ShopApplication::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_application_shop_id")
                            .from(ShopApplication::Table, ShopApplication::ShopId)
                            .to(LayoutShop::Table, LayoutShop::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopApplication {
    #[sea_orm(iden = "shop_applications")]
    Table,
    Id,
    VendorId,
    StationId,
    ShopId,
    ProposedRent,
    FinalRent,
    DurationMonths,
    BusinessPlan,
    Status,
    RejectionReason,
    SubmittedAt,
    DecidedAt,
}
