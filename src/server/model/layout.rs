//! Station layout and shop domain models.
//!
//! A layout is a rectangle in metres with shop rectangles placed inside it. The
//! geometry checks here are pure; the layout service applies them before writing.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ShopStatus;

use crate::model::layout::{LayoutDto, SaveLayoutDto, ShopDto};

/// Smallest allowed shop side, in metres.
pub const MIN_SHOP_DIMENSION: f64 = 2.0;
/// Largest allowed shop side, in metres.
pub const MAX_SHOP_DIMENSION: f64 = 20.0;
/// Share of the layout area shops may cover; the rest is kept for corridors.
pub const MAX_SHOP_COVERAGE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: i32,
    pub layout_id: i32,
    pub station_id: i32,
    pub shop_number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    pub category: String,
    pub base_rent: i64,
    pub status: ShopStatus,
    pub vendor_id: Option<i32>,
}

impl Shop {
    pub fn from_entity(entity: entity::layout_shop::Model) -> Self {
        Self {
            id: entity.id,
            layout_id: entity.layout_id,
            station_id: entity.station_id,
            shop_number: entity.shop_number,
            x: entity.x,
            y: entity.y,
            width: entity.width,
            height: entity.height,
            area: entity.area,
            category: entity.category,
            base_rent: entity.base_rent,
            status: entity.status,
            vendor_id: entity.vendor_id,
        }
    }

    pub fn into_dto(self) -> ShopDto {
        ShopDto {
            id: self.id,
            station_id: self.station_id,
            shop_number: self.shop_number,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            area: self.area,
            category: self.category,
            base_rent: self.base_rent,
            status: self.status,
            vendor_id: self.vendor_id,
        }
    }

    /// Whether the shop is held by an application or a license.
    pub fn is_allocated(&self) -> bool {
        self.status != ShopStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub id: i32,
    pub station_id: i32,
    pub width: f64,
    pub height: f64,
    pub updated_at: DateTime<Utc>,
    pub shops: Vec<Shop>,
}

impl Layout {
    pub fn from_entity(
        entity: entity::station_layout::Model,
        shops: Vec<entity::layout_shop::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            station_id: entity.station_id,
            width: entity.width,
            height: entity.height,
            updated_at: entity.updated_at,
            shops: shops.into_iter().map(Shop::from_entity).collect(),
        }
    }

    pub fn total_area(&self) -> f64 {
        self.width * self.height
    }

    pub fn used_area(&self) -> f64 {
        self.shops.iter().map(|s| s.area).sum()
    }

    pub fn into_dto(self) -> LayoutDto {
        let total_area = self.total_area();
        let used_area = self.used_area();
        let coverage = if total_area > 0.0 {
            used_area / total_area
        } else {
            0.0
        };

        LayoutDto {
            station_id: self.station_id,
            width: self.width,
            height: self.height,
            total_area,
            used_area,
            coverage,
            shops: self.shops.into_iter().map(Shop::into_dto).collect(),
            updated_at: self.updated_at,
        }
    }
}

/// Requested placement of one shop.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopPlan {
    pub shop_number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub category: String,
    pub base_rent: i64,
}

impl ShopPlan {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Axis-aligned overlap test. Touching edges do not overlap.
    pub fn overlaps(&self, other: &ShopPlan) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    fn same_geometry(&self, shop: &Shop) -> bool {
        self.x == shop.x && self.y == shop.y && self.width == shop.width && self.height == shop.height
    }
}

/// Parameters for replacing a station's layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveLayoutParams {
    pub station_id: i32,
    pub width: f64,
    pub height: f64,
    pub shops: Vec<ShopPlan>,
}

impl SaveLayoutParams {
    pub fn from_dto(station_id: i32, dto: SaveLayoutDto) -> Self {
        Self {
            station_id,
            width: dto.width,
            height: dto.height,
            shops: dto
                .shops
                .into_iter()
                .map(|s| ShopPlan {
                    shop_number: s.shop_number.trim().to_string(),
                    x: s.x,
                    y: s.y,
                    width: s.width,
                    height: s.height,
                    category: s.category.trim().to_string(),
                    base_rent: s.base_rent,
                })
                .collect(),
        }
    }

    /// Checks the requested geometry on its own and against the shops already saved.
    ///
    /// # Arguments
    /// - `existing` - Shops currently stored for the station
    ///
    /// # Returns
    /// - `Ok(())` - The layout can be saved
    /// - `Err(String)` - Description of the first violated rule
    pub fn validate(&self, existing: &[Shop]) -> Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err("Layout width and height must be greater than 0".to_string());
        }

        let mut numbers = std::collections::HashSet::new();
        for shop in &self.shops {
            if shop.shop_number.is_empty() {
                return Err("Every shop needs a shop number".to_string());
            }
            if !numbers.insert(shop.shop_number.as_str()) {
                return Err(format!("Shop number {} is used twice", shop.shop_number));
            }
            if !(MIN_SHOP_DIMENSION..=MAX_SHOP_DIMENSION).contains(&shop.width)
                || !(MIN_SHOP_DIMENSION..=MAX_SHOP_DIMENSION).contains(&shop.height)
            {
                return Err(format!(
                    "Shop {} sides must be between {} and {} metres",
                    shop.shop_number, MIN_SHOP_DIMENSION, MAX_SHOP_DIMENSION
                ));
            }
            if shop.x < 0.0
                || shop.y < 0.0
                || shop.x + shop.width > self.width
                || shop.y + shop.height > self.height
            {
                return Err(format!(
                    "Shop {} lies outside the layout",
                    shop.shop_number
                ));
            }
            if shop.base_rent <= 0 {
                return Err(format!(
                    "Shop {} base rent must be greater than 0",
                    shop.shop_number
                ));
            }
        }

        for (i, a) in self.shops.iter().enumerate() {
            if let Some(b) = self.shops[i + 1..].iter().find(|b| a.overlaps(b)) {
                return Err(format!(
                    "Shops {} and {} overlap",
                    a.shop_number, b.shop_number
                ));
            }
        }

        let used: f64 = self.shops.iter().map(ShopPlan::area).sum();
        if used > self.width * self.height * MAX_SHOP_COVERAGE {
            return Err(format!(
                "Shops may cover at most {}% of the layout",
                (MAX_SHOP_COVERAGE * 100.0) as u32
            ));
        }

        for shop in existing.iter().filter(|s| s.is_allocated()) {
            match self.shops.iter().find(|p| p.shop_number == shop.shop_number) {
                None => {
                    return Err(format!(
                        "Shop {} is allocated and cannot be removed",
                        shop.shop_number
                    ))
                }
                Some(plan) if !plan.same_geometry(shop) => {
                    return Err(format!(
                        "Shop {} is allocated and cannot be moved or resized",
                        shop.shop_number
                    ))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
