use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(pk_auto(Vendor::Id))
                    .col(integer_uniq(Vendor::UserId))
                    .col(string(Vendor::BusinessName))
                    .col(string(Vendor::BusinessType))
                    .col(string(Vendor::OwnerName))
                    .col(string(Vendor::PanNumber))
                    .col(string_null(Vendor::GstNumber))
                    .col(string(Vendor::BankAccountNumber))
                    .col(string(Vendor::IfscCode))
                    .col(string_null(Vendor::FoodLicenseNumber))
                    .col(big_integer(Vendor::AnnualTurnover))
                    .col(boolean(Vendor::RailwayDeclaration).default(false))
                    .col(boolean(Vendor::IdentityVerified).default(false))
                    .col(boolean(Vendor::BankVerified).default(false))
                    .col(boolean(Vendor::BusinessVerified).default(false))
                    .col(boolean(Vendor::FoodLicenseVerified).default(false))
                    .col(boolean(Vendor::PoliceVerified).default(false))
                    .col(boolean(Vendor::FinancialVerified).default(false))
                    .col(boolean(Vendor::RailwayDeclarationVerified).default(false))
                    .col(string_len(Vendor::VerificationStatus, 32))
                    .col(string_null(Vendor::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Vendor::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Vendor::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_user_id")
                            .from(Vendor::Table, Vendor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vendor {
    #[sea_orm(iden = "vendors")]
    Table,
    Id,
    UserId,
    BusinessName,
    BusinessType,
    OwnerName,
    PanNumber,
    GstNumber,
    BankAccountNumber,
    IfscCode,
    FoodLicenseNumber,
    AnnualTurnover,
    RailwayDeclaration,
    IdentityVerified,
    BankVerified,
    BusinessVerified,
    FoodLicenseVerified,
    PoliceVerified,
    FinancialVerified,
    RailwayDeclarationVerified,
    VerificationStatus,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
