//! License repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LicenseStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::license::{IssueLicenseParams, License};

pub struct LicenseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LicenseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active license.
    pub async fn create(&self, param: IssueLicenseParams) -> Result<License, DbErr> {
        let entity = entity::license::ActiveModel {
            license_number: ActiveValue::Set(param.license_number),
            vendor_id: ActiveValue::Set(param.vendor_id),
            station_id: ActiveValue::Set(param.station_id),
            shop_id: ActiveValue::Set(param.shop_id),
            application_id: ActiveValue::Set(param.application_id),
            monthly_rent: ActiveValue::Set(param.monthly_rent),
            status: ActiveValue::Set(LicenseStatus::Active),
            issued_at: ActiveValue::Set(Utc::now()),
            valid_from: ActiveValue::Set(param.valid_from),
            valid_until: ActiveValue::Set(param.valid_until),
            qr_code: ActiveValue::Set(param.qr_code),
            revocation_reason: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(License::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<License>, DbErr> {
        let entity = entity::prelude::License::find_by_id(id).one(self.db).await?;
        Ok(entity.map(License::from_entity))
    }

    pub async fn find_by_number(&self, license_number: &str) -> Result<Option<License>, DbErr> {
        let entity = entity::prelude::License::find()
            .filter(entity::license::Column::LicenseNumber.eq(license_number))
            .one(self.db)
            .await?;
        Ok(entity.map(License::from_entity))
    }

    /// Counts licenses whose number starts with `prefix`.
    ///
    /// Used to derive the next serial for a station and year.
    pub async fn count_with_prefix(&self, prefix: &str) -> Result<u64, DbErr> {
        entity::prelude::License::find()
            .filter(entity::license::Column::LicenseNumber.starts_with(prefix))
            .count(self.db)
            .await
    }

    pub async fn get_by_vendor(&self, vendor_id: i32) -> Result<Vec<License>, DbErr> {
        let entities = entity::prelude::License::find()
            .filter(entity::license::Column::VendorId.eq(vendor_id))
            .order_by_desc(entity::license::Column::IssuedAt)
            .order_by_desc(entity::license::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(License::from_entity).collect())
    }

    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<License>, DbErr> {
        let entities = entity::prelude::License::find()
            .filter(entity::license::Column::StationId.eq(station_id))
            .order_by_desc(entity::license::Column::IssuedAt)
            .order_by_desc(entity::license::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(License::from_entity).collect())
    }

    /// Sets the status of a license, recording the reason when one is given.
    pub async fn set_status(
        &self,
        id: i32,
        status: LicenseStatus,
        reason: Option<String>,
    ) -> Result<Option<License>, DbErr> {
        let Some(entity) = entity::prelude::License::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        if reason.is_some() {
            active.revocation_reason = ActiveValue::Set(reason);
        }
        let entity = active.update(self.db).await?;

        Ok(Some(License::from_entity(entity)))
    }

    /// Lists active or suspended licenses whose validity ended before `now`.
    pub async fn get_lapsed(&self, now: DateTime<Utc>) -> Result<Vec<License>, DbErr> {
        let entities = entity::prelude::License::find()
            .filter(
                entity::license::Column::Status
                    .is_in([LicenseStatus::Active, LicenseStatus::Suspended]),
            )
            .filter(entity::license::Column::ValidUntil.lt(now))
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(License::from_entity).collect())
    }

    /// Counts active licenses, optionally for one station or one vendor.
    pub async fn count_active(
        &self,
        station_id: Option<i32>,
        vendor_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::License::find()
            .filter(entity::license::Column::Status.eq(LicenseStatus::Active));
        if let Some(station_id) = station_id {
            query = query.filter(entity::license::Column::StationId.eq(station_id));
        }
        if let Some(vendor_id) = vendor_id {
            query = query.filter(entity::license::Column::VendorId.eq(vendor_id));
        }
        query.count(self.db).await
    }
}
