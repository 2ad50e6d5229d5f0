pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_station_table;
mod m20260101_000003_create_station_layout_table;
mod m20260101_000004_create_vendor_table;
mod m20260101_000005_create_layout_shop_table;
mod m20260101_000006_create_document_table;
mod m20260102_000007_create_shop_application_table;
mod m20260102_000008_create_negotiation_room_table;
mod m20260102_000009_create_negotiation_message_table;
mod m20260103_000010_create_license_table;
mod m20260103_000011_create_vendor_agreement_table;
mod m20260104_000012_create_inspector_table;
mod m20260104_000013_create_inspection_table;
mod m20260105_000014_create_vendor_payment_table;
mod m20260105_000015_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_station_table::Migration),
            Box::new(m20260101_000003_create_station_layout_table::Migration),
            Box::new(m20260101_000004_create_vendor_table::Migration),
            Box::new(m20260101_000005_create_layout_shop_table::Migration),
            Box::new(m20260101_000006_create_document_table::Migration),
            Box::new(m20260102_000007_create_shop_application_table::Migration),
            Box::new(m20260102_000008_create_negotiation_room_table::Migration),
            Box::new(m20260102_000009_create_negotiation_message_table::Migration),
            Box::new(m20260103_000010_create_license_table::Migration),
            Box::new(m20260103_000011_create_vendor_agreement_table::Migration),
            Box::new(m20260104_000012_create_inspector_table::Migration),
            Box::new(m20260104_000013_create_inspection_table::Migration),
            Box::new(m20260105_000014_create_vendor_payment_table::Migration),
            Box::new(m20260105_000015_create_notification_table::Migration),
        ]
    }
}
