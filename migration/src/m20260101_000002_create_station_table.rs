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
                    .table(Station::Table)
                    .if_not_exists()
                    .col(pk_auto(Station::Id))
                    .col(string(Station::Name))
                    .col(string_uniq(Station::Code))
                    .col(string(Station::Zone))
                    .col(string(Station::City))
                    .col(integer(Station::PlatformCount))
                    .col(integer_null(Station::ManagerId))
                    .col(
                        timestamp_with_time_zone(Station::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_station_manager_id")
                            .from(Station::Table, Station::ManagerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Station {
    #[sea_orm(iden = "stations")]
    Table,
    Id,
    Name,
    Code,
    Zone,
    City,
    PlatformCount,
    ManagerId,
    CreatedAt,
}
