use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_vendor_table::Vendor,
    m20260103_000010_create_license_table::License,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorPayment::Id))
                    .col(integer(VendorPayment::VendorId))
                    .col(integer(VendorPayment::LicenseId))
                    .col(string_len(VendorPayment::PaymentType, 32))
                    .col(big_integer(VendorPayment::Amount))
                    .col(string_null(VendorPayment::Period))
                    .col(timestamp_with_time_zone(VendorPayment::DueDate))
                    .col(string_len(VendorPayment::Status, 32))
                    .col(timestamp_with_time_zone_null(VendorPayment::PaidAt))
                    .col(string_null(VendorPayment::TransactionRef))
                    .col(
                        timestamp_with_time_zone(VendorPayment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_payment_vendor_id")
                            .from(VendorPayment::Table, VendorPayment::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_payment_license_id")
                            .from(VendorPayment::Table, VendorPayment::LicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorPayment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VendorPayment {
    #[sea_orm(iden = "vendor_payments")]
    Table,
    Id,
    VendorId,
    LicenseId,
    PaymentType,
    Amount,
    Period,
    DueDate,
    Status,
    PaidAt,
    TransactionRef,
    CreatedAt,
}
