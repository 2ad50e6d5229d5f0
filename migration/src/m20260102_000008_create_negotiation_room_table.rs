use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000007_create_shop_application_table::ShopApplication;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NegotiationRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(NegotiationRoom::Id))
                    .col(integer_uniq(NegotiationRoom::ApplicationId))
                    .col(integer(NegotiationRoom::VendorUserId))
                    .col(integer(NegotiationRoom::ManagerUserId))
                    .col(string_len(NegotiationRoom::Status, 32))
                    .col(big_integer_null(NegotiationRoom::CurrentOffer))
                    .col(integer_null(NegotiationRoom::LastOfferBy))
                    .col(big_integer_null(NegotiationRoom::AgreedRent))
                    .col(
                        timestamp_with_time_zone(NegotiationRoom::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(NegotiationRoom::ClosedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_negotiation_room_application_id")
                            .from(NegotiationRoom::Table, NegotiationRoom::ApplicationId)
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
            .drop_table(Table::drop().table(NegotiationRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NegotiationRoom {
    #[sea_orm(iden = "negotiation_rooms")]
    Table,
    Id,
    ApplicationId,
    VendorUserId,
    ManagerUserId,
    Status,
    CurrentOffer,
    LastOfferBy,
    AgreedRent,
    CreatedAt,
    ClosedAt,
}
