use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_vendor_table::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer(Document::VendorId))
                    .col(string_len(Document::DocType, 32))
                    .col(string(Document::FileUrl))
                    .col(string(Document::FileName))
                    .col(string_len(Document::Status, 32))
                    .col(string_null(Document::Remarks))
                    .col(integer_null(Document::ReviewedBy))
                    .col(
                        timestamp_with_time_zone(Document::UploadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Document::ReviewedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_vendor_id")
                            .from(Document::Table, Document::VendorId)
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
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    #[sea_orm(iden = "documents")]
    Table,
    Id,
    VendorId,
    DocType,
    FileUrl,
    FileName,
    Status,
    Remarks,
    ReviewedBy,
    UploadedAt,
    ReviewedAt,
}
