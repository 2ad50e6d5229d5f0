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
                    .table(VendorAgreement::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorAgreement::Id))
                    .col(integer_uniq(VendorAgreement::ApplicationId))
                    .col(integer(VendorAgreement::LicenseId))
                    .col(integer(VendorAgreement::VendorId))
                    .col(integer(VendorAgreement::StationId))
                    .col(big_integer(VendorAgreement::MonthlyRent))
                    .col(big_integer(VendorAgreement::SecurityDeposit))
                    .col(timestamp_with_time_zone(VendorAgreement::StartDate))
                    .col(timestamp_with_time_zone(VendorAgreement::EndDate))
                    .col(text(VendorAgreement::Terms))
                    .col(string_len(VendorAgreement::Status, 32))
                    .col(timestamp_with_time_zone_null(VendorAgreement::SignedAt))
                    .col(
                        timestamp_with_time_zone(VendorAgreement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_agreement_license_id")
                            .from(VendorAgreement::Table, VendorAgreement::LicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_agreement_vendor_id")
                            .from(VendorAgreement::Table, VendorAgreement::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorAgreement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VendorAgreement {
    #[sea_orm(iden = "vendor_agreements")]
    Table,
    Id,
    ApplicationId,
    LicenseId,
    VendorId,
    StationId,
    MonthlyRent,
    SecurityDeposit,
    StartDate,
    EndDate,
    Terms,
    Status,
    SignedAt,
    CreatedAt,
}
