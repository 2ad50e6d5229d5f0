use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_station_table::Station;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationLayout::Table)
                    .if_not_exists()
                    .col(pk_auto(StationLayout::Id))
                    .col(integer_uniq(StationLayout::StationId))
                    .col(double(StationLayout::Width))
                    .col(double(StationLayout::Height))
                    .col(
                        timestamp_with_time_zone(StationLayout::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_station_layout_station_id")
                            .from(StationLayout::Table, StationLayout::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationLayout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StationLayout {
    #[sea_orm(iden = "station_layouts")]
    Table,
    Id,
    StationId,
    Width,
    Height,
    UpdatedAt,
}
