use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260103_000010_create_license_table::License,
    m20260104_000012_create_inspector_table::Inspector,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inspection::Table)
                    .if_not_exists()
                    .col(pk_auto(Inspection::Id))
                    .col(integer(Inspection::LicenseId))
                    .col(integer(Inspection::InspectorId))
                    .col(integer(Inspection::StationId))
                    .col(string_len(Inspection::Result, 32))
                    .col(integer(Inspection::HygieneRating))
                    .col(text(Inspection::Remarks))
                    .col(string_null(Inspection::Violations))
                    .col(
                        timestamp_with_time_zone(Inspection::InspectedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspection_license_id")
                            .from(Inspection::Table, Inspection::LicenseId)
                            .to(License::Table, License::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspection_inspector_id")
                            .from(Inspection::Table, Inspection::InspectorId)
                            .to(Inspector::Table, Inspector::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inspection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inspection {
    #[sea_orm(iden = "inspections")]
    Table,
    Id,
    LicenseId,
    InspectorId,
    StationId,
    Result,
    HygieneRating,
    Remarks,
    Violations,
    InspectedAt,
}
