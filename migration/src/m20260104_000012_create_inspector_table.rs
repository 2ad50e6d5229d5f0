use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000002_create_station_table::Station,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inspector::Table)
                    .if_not_exists()
                    .col(pk_auto(Inspector::Id))
                    .col(integer_uniq(Inspector::UserId))
                    .col(string_uniq(Inspector::BadgeNumber))
                    .col(integer(Inspector::StationId))
                    .col(
                        timestamp_with_time_zone(Inspector::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspector_user_id")
                            .from(Inspector::Table, Inspector::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspector_station_id")
                            .from(Inspector::Table, Inspector::StationId)
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
            .drop_table(Table::drop().table(Inspector::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inspector {
    #[sea_orm(iden = "inspectors")]
    Table,
    Id,
    UserId,
    BadgeNumber,
    StationId,
    CreatedAt,
}
