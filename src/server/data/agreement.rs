//! Vendor agreement repository.

use chrono::Utc;
use entity::sea_orm_active_enums::AgreementStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::agreement::{Agreement, CreateAgreementParams, SECURITY_DEPOSIT_MONTHS};

pub struct AgreementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgreementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an agreement awaiting the vendor's signature.
    ///
    /// The security deposit is derived from the monthly rent.
    pub async fn create(&self, param: CreateAgreementParams) -> Result<Agreement, DbErr> {
        let entity = entity::vendor_agreement::ActiveModel {
            application_id: ActiveValue::Set(param.application_id),
            license_id: ActiveValue::Set(param.license_id),
            vendor_id: ActiveValue::Set(param.vendor_id),
            station_id: ActiveValue::Set(param.station_id),
            monthly_rent: ActiveValue::Set(param.monthly_rent),
            security_deposit: ActiveValue::Set(param.monthly_rent * SECURITY_DEPOSIT_MONTHS),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            terms: ActiveValue::Set(param.terms),
            status: ActiveValue::Set(AgreementStatus::PendingSignature),
            signed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Agreement::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Agreement>, DbErr> {
        let entity = entity::prelude::VendorAgreement::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Agreement::from_entity))
    }

    pub async fn get_by_vendor(&self, vendor_id: i32) -> Result<Vec<Agreement>, DbErr> {
        let entities = entity::prelude::VendorAgreement::find()
            .filter(entity::vendor_agreement::Column::VendorId.eq(vendor_id))
            .order_by_desc(entity::vendor_agreement::Column::CreatedAt)
            .order_by_desc(entity::vendor_agreement::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Agreement::from_entity).collect())
    }

    /// Marks an agreement signed now.
    pub async fn sign(&self, id: i32) -> Result<Option<Agreement>, DbErr> {
        let Some(entity) = entity::prelude::VendorAgreement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(AgreementStatus::Signed);
        active.signed_at = ActiveValue::Set(Some(Utc::now()));
        let entity = active.update(self.db).await?;

        Ok(Some(Agreement::from_entity(entity)))
    }

    /// Terminates every agreement attached to a license.
    pub async fn terminate_by_license(&self, license_id: i32) -> Result<(), DbErr> {
        let entities = entity::prelude::VendorAgreement::find()
            .filter(entity::vendor_agreement::Column::LicenseId.eq(license_id))
            .filter(entity::vendor_agreement::Column::Status.ne(AgreementStatus::Terminated))
            .all(self.db)
            .await?;

        for entity in entities {
            let mut active = entity.into_active_model();
            active.status = ActiveValue::Set(AgreementStatus::Terminated);
            active.update(self.db).await?;
        }

        Ok(())
    }
}
