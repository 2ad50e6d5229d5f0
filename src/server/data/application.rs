//! Shop application repository.

use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::application::{Application, SubmitApplicationParams};

fn active_statuses() -> [ApplicationStatus; 2] {
    [ApplicationStatus::Pending, ApplicationStatus::Negotiating]
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending application.
    pub async fn create(
        &self,
        vendor_id: i32,
        param: SubmitApplicationParams,
    ) -> Result<Application, DbErr> {
        let entity = entity::shop_application::ActiveModel {
            vendor_id: ActiveValue::Set(vendor_id),
            station_id: ActiveValue::Set(param.station_id),
            shop_id: ActiveValue::Set(param.shop_id),
            proposed_rent: ActiveValue::Set(param.proposed_rent),
            final_rent: ActiveValue::Set(None),
            duration_months: ActiveValue::Set(param.duration_months),
            business_plan: ActiveValue::Set(param.business_plan),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            rejection_reason: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(Utc::now()),
            decided_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        let entity = entity::prelude::ShopApplication::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Application::from_entity))
    }

    /// Whether the vendor already has a pending or negotiating application for the shop.
    pub async fn has_active_for_shop(&self, vendor_id: i32, shop_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::VendorId.eq(vendor_id))
            .filter(entity::shop_application::Column::ShopId.eq(shop_id))
            .filter(entity::shop_application::Column::Status.is_in(active_statuses()))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Lists a vendor's applications, newest first.
    pub async fn get_by_vendor(
        &self,
        vendor_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, DbErr> {
        let mut query = entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::VendorId.eq(vendor_id));
        if let Some(status) = status {
            query = query.filter(entity::shop_application::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::shop_application::Column::SubmittedAt)
            .order_by_desc(entity::shop_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Lists a station's applications, newest first.
    pub async fn get_by_station(
        &self,
        station_id: i32,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, DbErr> {
        let mut query = entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::StationId.eq(station_id));
        if let Some(status) = status {
            query = query.filter(entity::shop_application::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::shop_application::Column::SubmittedAt)
            .order_by_desc(entity::shop_application::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    /// Moves an application to a new status.
    ///
    /// Terminal statuses (approved, rejected, withdrawn) stamp `decided_at`.
    pub async fn set_status(
        &self,
        id: i32,
        status: ApplicationStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Application>, DbErr> {
        let Some(entity) = entity::prelude::ShopApplication::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        if rejection_reason.is_some() {
            active.rejection_reason = ActiveValue::Set(rejection_reason);
        }
        if !active_statuses().contains(&status) {
            active.decided_at = ActiveValue::Set(Some(Utc::now()));
        }
        let entity = active.update(self.db).await?;

        Ok(Some(Application::from_entity(entity)))
    }

    /// Stores the rent agreed in negotiation.
    pub async fn set_final_rent(&self, id: i32, rent: i64) -> Result<Option<Application>, DbErr> {
        let Some(entity) = entity::prelude::ShopApplication::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.final_rent = ActiveValue::Set(Some(rent));
        let entity = active.update(self.db).await?;

        Ok(Some(Application::from_entity(entity)))
    }

    /// Lists other pending or negotiating applications for a shop.
    pub async fn get_other_active_for_shop(
        &self,
        shop_id: i32,
        except_id: i32,
    ) -> Result<Vec<Application>, DbErr> {
        let entities = entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::ShopId.eq(shop_id))
            .filter(entity::shop_application::Column::Id.ne(except_id))
            .filter(entity::shop_application::Column::Status.is_in(active_statuses()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Application::from_entity).collect())
    }

    pub async fn count_by_vendor_and_status(
        &self,
        vendor_id: i32,
        status: ApplicationStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::VendorId.eq(vendor_id))
            .filter(entity::shop_application::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn count_by_station_and_status(
        &self,
        station_id: i32,
        status: ApplicationStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::ShopApplication::find()
            .filter(entity::shop_application::Column::StationId.eq(station_id))
            .filter(entity::shop_application::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
