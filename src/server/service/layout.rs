//! Station layout editing and shop availability.

use entity::sea_orm_active_enums::ShopStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{layout::LayoutRepository, station::StationRepository},
    error::{internal::InternalError, AppError},
    model::layout::{Layout, SaveLayoutParams, Shop},
};

pub struct LayoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LayoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a station's layout.
    ///
    /// # Returns
    /// - `Ok(Layout)` - Layout with its shops
    /// - `Err(AppError::NotFound)` - Station missing or no layout saved yet
    pub async fn get(&self, station_id: i32) -> Result<Layout, AppError> {
        LayoutRepository::new(self.db)
            .find_by_station(station_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Station has no layout yet".to_string()))
    }

    /// Replaces a station's layout geometry.
    ///
    /// Shops are matched to stored shops by shop number and keep their id, status
    /// and holder. Unmatched shops are created as available. Stored shops missing
    /// from the request are deleted, which is refused for allocated shops and for
    /// shops with application history.
    ///
    /// # Returns
    /// - `Ok(Layout)` - The saved layout
    /// - `Err(AppError::NotFound)` - Station missing
    /// - `Err(AppError::BadRequest)` - Geometry rule violated
    pub async fn save(&self, params: SaveLayoutParams) -> Result<Layout, AppError> {
        let station_id = params.station_id;

        let txn = self.db.begin().await?;

        if StationRepository::new(&txn).find_by_id(station_id).await?.is_none() {
            return Err(AppError::NotFound("Station not found".to_string()));
        }

        let repo = LayoutRepository::new(&txn);
        let existing = repo
            .find_by_station(station_id)
            .await?
            .map(|layout| layout.shops)
            .unwrap_or_default();

        params.validate(&existing).map_err(AppError::BadRequest)?;

        let layout = repo
            .upsert_layout(station_id, params.width, params.height)
            .await?;

        for shop in &existing {
            if params.shops.iter().any(|p| p.shop_number == shop.shop_number) {
                continue;
            }
            if repo.shop_has_applications(shop.id).await? {
                return Err(AppError::BadRequest(format!(
                    "Shop {} has applications and cannot be removed",
                    shop.shop_number
                )));
            }
            repo.delete_shop(shop.id).await?;
        }

        for plan in &params.shops {
            match existing.iter().find(|s| s.shop_number == plan.shop_number) {
                Some(shop) => {
                    repo.update_shop(shop.id, plan).await?;
                }
                None => {
                    repo.create_shop(&layout, plan).await?;
                }
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Saved layout for station {} with {} shops",
            station_id,
            params.shops.len()
        );

        LayoutRepository::new(self.db)
            .find_by_station(station_id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "StationLayout",
                    id: layout.id,
                }
                .into()
            })
    }

    /// Lists the shops of a station that can still be applied for.
    pub async fn available_shops(&self, station_id: i32) -> Result<Vec<Shop>, AppError> {
        if StationRepository::new(self.db)
            .find_by_id(station_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Station not found".to_string()));
        }

        Ok(LayoutRepository::new(self.db)
            .get_shops_by_status(station_id, ShopStatus::Available)
            .await?)
    }
}
