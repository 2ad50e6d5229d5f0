//! Vendor payment repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::payment::{CreatePaymentParams, Payment};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending due.
    pub async fn create(&self, param: CreatePaymentParams) -> Result<Payment, DbErr> {
        let entity = entity::vendor_payment::ActiveModel {
            vendor_id: ActiveValue::Set(param.vendor_id),
            license_id: ActiveValue::Set(param.license_id),
            payment_type: ActiveValue::Set(param.payment_type),
            amount: ActiveValue::Set(param.amount),
            period: ActiveValue::Set(param.period),
            due_date: ActiveValue::Set(param.due_date),
            status: ActiveValue::Set(PaymentStatus::Pending),
            paid_at: ActiveValue::Set(None),
            transaction_ref: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::VendorPayment::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Payment::from_entity))
    }

    /// Lists a vendor's dues ordered by due date.
    pub async fn get_by_vendor(&self, vendor_id: i32) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::VendorPayment::find()
            .filter(entity::vendor_payment::Column::VendorId.eq(vendor_id))
            .order_by_asc(entity::vendor_payment::Column::DueDate)
            .order_by_asc(entity::vendor_payment::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    pub async fn get_by_license(&self, license_id: i32) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::VendorPayment::find()
            .filter(entity::vendor_payment::Column::LicenseId.eq(license_id))
            .order_by_asc(entity::vendor_payment::Column::DueDate)
            .order_by_asc(entity::vendor_payment::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Lists dues raised against licenses at a station.
    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::VendorPayment::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::vendor_payment::Relation::License.def(),
            )
            .filter(entity::license::Column::StationId.eq(station_id))
            .order_by_asc(entity::vendor_payment::Column::DueDate)
            .order_by_asc(entity::vendor_payment::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Lists every due with the given status.
    pub async fn get_by_status(&self, status: PaymentStatus) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::VendorPayment::find()
            .filter(entity::vendor_payment::Column::Status.eq(status))
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Marks a due paid with the gateway reference.
    pub async fn mark_paid(
        &self,
        id: i32,
        transaction_ref: String,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(entity) = entity::prelude::VendorPayment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(PaymentStatus::Paid);
        active.paid_at = ActiveValue::Set(Some(Utc::now()));
        active.transaction_ref = ActiveValue::Set(Some(transaction_ref));
        let entity = active.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }

    /// Flags pending dues whose due date has passed as overdue.
    ///
    /// # Returns
    /// - `Ok(Vec<Payment>)` - The dues that were flagged by this call
    pub async fn mark_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::VendorPayment::find()
            .filter(entity::vendor_payment::Column::Status.eq(PaymentStatus::Pending))
            .filter(entity::vendor_payment::Column::DueDate.lt(now))
            .all(self.db)
            .await?;

        let mut flagged = Vec::with_capacity(entities.len());
        for entity in entities {
            let mut active = entity.into_active_model();
            active.status = ActiveValue::Set(PaymentStatus::Overdue);
            flagged.push(Payment::from_entity(active.update(self.db).await?));
        }

        Ok(flagged)
    }
}
