use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_station_layout_table::StationLayout,
    m20260101_000004_create_vendor_table::Vendor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LayoutShop::Table)
                    .if_not_exists()
                    .col(pk_auto(LayoutShop::Id))
                    .col(integer(LayoutShop::LayoutId))
                    .col(integer(LayoutShop::StationId))
                    .col(string(LayoutShop::ShopNumber))
                    .col(double(LayoutShop::X))
                    .col(double(LayoutShop::Y))
                    .col(double(LayoutShop::Width))
                    .col(double(LayoutShop::Height))
                    .col(double(LayoutShop::Area))
                    .col(string(LayoutShop::Category))
                    .col(big_integer(LayoutShop::BaseRent))
                    .col(string_len(LayoutShop::Status, 32))
                    .col(integer_null(LayoutShop::VendorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_layout_shop_layout_id")
                            .from(LayoutShop::Table, LayoutShop::LayoutId)
                            .to(StationLayout::Table, StationLayout::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_layout_shop_vendor_id")
                            .from(LayoutShop::Table, LayoutShop::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_layout_shop_layout_number")
                    .table(LayoutShop::Table)
                    .col(LayoutShop::LayoutId)
                    .col(LayoutShop::ShopNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LayoutShop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LayoutShop {
    #[sea_orm(iden = "layout_shops")]
    Table,
    Id,
    LayoutId,
    StationId,
    ShopNumber,
    X,
    Y,
    Width,
    Height,
    Area,
    Category,
    BaseRent,
    Status,
    VendorId,
}
