use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000008_create_negotiation_room_table::NegotiationRoom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NegotiationMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(NegotiationMessage::Id))
                    .col(integer(NegotiationMessage::RoomId))
                    .col(integer(NegotiationMessage::SenderId))
                    .col(string_len(NegotiationMessage::SenderRole, 32))
                    .col(text(NegotiationMessage::Content))
                    .col(big_integer_null(NegotiationMessage::OfferedRent))
                    .col(
                        timestamp_with_time_zone(NegotiationMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_negotiation_message_room_id")
                            .from(NegotiationMessage::Table, NegotiationMessage::RoomId)
                            .to(NegotiationRoom::Table, NegotiationRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NegotiationMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NegotiationMessage {
    #[sea_orm(iden = "negotiation_messages")]
    Table,
    Id,
    RoomId,
    SenderId,
    SenderRole,
    Content,
    OfferedRent,
    CreatedAt,
}
