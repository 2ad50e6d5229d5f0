//! Inspection repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::inspection::{Inspection, LogInspectionParams};

pub struct InspectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InspectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        inspector_id: i32,
        station_id: i32,
        param: LogInspectionParams,
    ) -> Result<Inspection, DbErr> {
        let entity = entity::inspection::ActiveModel {
            license_id: ActiveValue::Set(param.license_id),
            inspector_id: ActiveValue::Set(inspector_id),
            station_id: ActiveValue::Set(station_id),
            result: ActiveValue::Set(param.result),
            hygiene_rating: ActiveValue::Set(param.hygiene_rating),
            remarks: ActiveValue::Set(param.remarks),
            violations: ActiveValue::Set(param.violations),
            inspected_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Inspection::from_entity(entity))
    }

    pub async fn get_by_license(&self, license_id: i32) -> Result<Vec<Inspection>, DbErr> {
        self.get_filtered(entity::inspection::Column::LicenseId.eq(license_id))
            .await
    }

    pub async fn get_by_station(&self, station_id: i32) -> Result<Vec<Inspection>, DbErr> {
        self.get_filtered(entity::inspection::Column::StationId.eq(station_id))
            .await
    }

    pub async fn get_by_inspector(&self, inspector_id: i32) -> Result<Vec<Inspection>, DbErr> {
        self.get_filtered(entity::inspection::Column::InspectorId.eq(inspector_id))
            .await
    }

    /// Lists inspections of every license a vendor holds.
    pub async fn get_by_vendor(&self, vendor_id: i32) -> Result<Vec<Inspection>, DbErr> {
        let entities = entity::prelude::Inspection::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::inspection::Relation::License.def(),
            )
            .filter(entity::license::Column::VendorId.eq(vendor_id))
            .order_by_desc(entity::inspection::Column::InspectedAt)
            .order_by_desc(entity::inspection::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Inspection::from_entity).collect())
    }

    /// Counts an inspector's inspections, optionally only those since a moment.
    pub async fn count_by_inspector(
        &self,
        inspector_id: i32,
        since: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Inspection::find()
            .filter(entity::inspection::Column::InspectorId.eq(inspector_id));
        if let Some(since) = since {
            query = query.filter(entity::inspection::Column::InspectedAt.gte(since));
        }
        query.count(self.db).await
    }

    async fn get_filtered(
        &self,
        condition: sea_orm::sea_query::SimpleExpr,
    ) -> Result<Vec<Inspection>, DbErr> {
        let entities = entity::prelude::Inspection::find()
            .filter(condition)
            .order_by_desc(entity::inspection::Column::InspectedAt)
            .order_by_desc(entity::inspection::Column::Id)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Inspection::from_entity).collect())
    }
}
