//! Vendor profile repository.

use chrono::Utc;
use entity::sea_orm_active_enums::VerificationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vendor::{Vendor, VendorProfileParams, VerificationChecks};

pub struct VendorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VendorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a profile with every check unset and status `PENDING`.
    pub async fn create(&self, user_id: i32, param: VendorProfileParams) -> Result<Vendor, DbErr> {
        let now = Utc::now();
        let entity = entity::vendor::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            business_name: ActiveValue::Set(param.business_name),
            business_type: ActiveValue::Set(param.business_type),
            owner_name: ActiveValue::Set(param.owner_name),
            pan_number: ActiveValue::Set(param.pan_number),
            gst_number: ActiveValue::Set(param.gst_number),
            bank_account_number: ActiveValue::Set(param.bank_account_number),
            ifsc_code: ActiveValue::Set(param.ifsc_code),
            food_license_number: ActiveValue::Set(param.food_license_number),
            annual_turnover: ActiveValue::Set(param.annual_turnover),
            railway_declaration: ActiveValue::Set(param.railway_declaration),
            identity_verified: ActiveValue::Set(false),
            bank_verified: ActiveValue::Set(false),
            business_verified: ActiveValue::Set(false),
            food_license_verified: ActiveValue::Set(false),
            police_verified: ActiveValue::Set(false),
            financial_verified: ActiveValue::Set(false),
            railway_declaration_verified: ActiveValue::Set(false),
            verification_status: ActiveValue::Set(VerificationStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vendor::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vendor>, DbErr> {
        let entity = entity::prelude::Vendor::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Vendor::from_entity))
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Vendor>, DbErr> {
        let entity = entity::prelude::Vendor::find()
            .filter(entity::vendor::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;
        Ok(entity.map(Vendor::from_entity))
    }

    /// Replaces the profile fields a vendor fills in.
    pub async fn update_profile(
        &self,
        id: i32,
        param: VendorProfileParams,
    ) -> Result<Option<Vendor>, DbErr> {
        let Some(entity) = entity::prelude::Vendor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.business_name = ActiveValue::Set(param.business_name);
        active.business_type = ActiveValue::Set(param.business_type);
        active.owner_name = ActiveValue::Set(param.owner_name);
        active.pan_number = ActiveValue::Set(param.pan_number);
        active.gst_number = ActiveValue::Set(param.gst_number);
        active.bank_account_number = ActiveValue::Set(param.bank_account_number);
        active.ifsc_code = ActiveValue::Set(param.ifsc_code);
        active.food_license_number = ActiveValue::Set(param.food_license_number);
        active.annual_turnover = ActiveValue::Set(param.annual_turnover);
        active.railway_declaration = ActiveValue::Set(param.railway_declaration);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Vendor::from_entity(entity)))
    }

    /// Stores the verification checks together with the status they imply.
    pub async fn save_verification(
        &self,
        id: i32,
        checks: VerificationChecks,
        status: VerificationStatus,
    ) -> Result<Option<Vendor>, DbErr> {
        let Some(entity) = entity::prelude::Vendor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.identity_verified = ActiveValue::Set(checks.identity);
        active.bank_verified = ActiveValue::Set(checks.bank);
        active.business_verified = ActiveValue::Set(checks.business);
        active.food_license_verified = ActiveValue::Set(checks.food_license);
        active.police_verified = ActiveValue::Set(checks.police);
        active.financial_verified = ActiveValue::Set(checks.financial);
        active.railway_declaration_verified = ActiveValue::Set(checks.railway_declaration);
        active.verification_status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Vendor::from_entity(entity)))
    }

    /// Marks a vendor as rejected with the given reason.
    pub async fn reject(&self, id: i32, reason: String) -> Result<Option<Vendor>, DbErr> {
        let Some(entity) = entity::prelude::Vendor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.verification_status = ActiveValue::Set(VerificationStatus::Rejected);
        active.rejection_reason = ActiveValue::Set(Some(reason));
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Vendor::from_entity(entity)))
    }

    /// Lists vendors, newest first, optionally filtered by verification status.
    pub async fn get_all(&self, status: Option<VerificationStatus>) -> Result<Vec<Vendor>, DbErr> {
        let mut query = entity::prelude::Vendor::find();
        if let Some(status) = status {
            query = query.filter(entity::vendor::Column::VerificationStatus.eq(status));
        }

        let entities = query
            .order_by_desc(entity::vendor::Column::CreatedAt)
            .order_by_desc(entity::vendor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vendor::from_entity).collect())
    }

    pub async fn count(&self, status: Option<VerificationStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Vendor::find();
        if let Some(status) = status {
            query = query.filter(entity::vendor::Column::VerificationStatus.eq(status));
        }
        query.count(self.db).await
    }
}
