use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_station_table::Station,
    m20260101_000004_create_vendor_table::Vendor,
    m20260101_000005_create_layout_shop_table::LayoutShop,
    m20260102_000007_create_shop_application_table::ShopApplication,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(License::Table)
                    .if_not_exists()
                    .col(pk_auto(License::Id))
                    .col(string_uniq(License::LicenseNumber))
                    .col(integer(License::VendorId))
                    .col(integer(License::StationId))
                    .col(integer(License::ShopId))
                    .col(integer_uniq(License::ApplicationId))
                    .col(big_integer(License::MonthlyRent))
                    .col(string_len(License::Status, 32))
                    .col(timestamp_with_time_zone(License::IssuedAt))
                    .col(timestamp_with_time_zone(License::ValidFrom))
                    .col(timestamp_with_time_zone(License::ValidUntil))
                    .col(text(License::QrCode))
                    .col(string_null(License::RevocationReason))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_vendor_id")
                            .from(License::Table, License::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_station_id")
                            .from(License::Table, License::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_shop_id")
                            .from(License::Table, License::ShopId)
                            .to(LayoutShop::Table, LayoutShop::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_application_id")
                            .from(License::Table, License::ApplicationId)
                            .to(ShopApplication::Table, ShopApplication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(License::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum License {
    #[sea_orm(iden = "licenses")]
    Table,
    Id,
    LicenseNumber,
    VendorId,
    StationId,
    ShopId,
    ApplicationId,
    MonthlyRent,
    Status,
    IssuedAt,
    ValidFrom,
    ValidUntil,
    QrCode,
    RevocationReason,
}
