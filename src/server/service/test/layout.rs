use super::*;
use crate::server::{
    model::layout::{SaveLayoutParams, ShopPlan},
    service::layout::LayoutService,
};
use entity::sea_orm_active_enums::ShopStatus;

fn shop(shop_number: &str, x: f64, y: f64) -> ShopPlan {
    ShopPlan {
        shop_number: shop_number.to_string(),
        x,
        y,
        width: 4.0,
        height: 5.0,
        category: "Food".to_string(),
        base_rent: 10_000,
    }
}

/// Tests saving a first layout creates available shops.
///
/// Expected: Ok(Layout) with two available shops
#[tokio::test]
async fn save_creates_layout_and_shops() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let layout = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 40.0,
            height: 10.0,
            shops: vec![shop("A-1", 0.0, 0.0), shop("A-2", 5.0, 0.0)],
        })
        .await?;

    assert_eq!(layout.station_id, station.id);
    assert_eq!(layout.shops.len(), 2);
    assert!(layout
        .shops
        .iter()
        .all(|s| s.status == ShopStatus::Available && s.area == 20.0));

    Ok(())
}

/// Tests overlapping shops are refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn save_rejects_overlap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::create_station(db).await?;

    let result = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 40.0,
            height: 10.0,
            shops: vec![shop("A-1", 0.0, 0.0), shop("A-2", 2.0, 1.0)],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resaving keeps a matched shop's id and allocation.
///
/// Verifies rent and category changes apply to the occupied shop while its
/// status and vendor survive, and that a new shop number creates a new shop.
///
/// Expected: Ok(Layout) with the occupied shop repriced and a new available shop
#[tokio::test]
async fn save_keeps_allocation_of_matched_shop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, existing) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let existing = factory::layout::occupy_shop(db, existing, vendor.id).await?;

    let layout = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 50.0,
            height: 20.0,
            shops: vec![
                ShopPlan {
                    base_rent: 12_500,
                    ..shop(&existing.shop_number, existing.x, existing.y)
                },
                shop("Z-9", 30.0, 0.0),
            ],
        })
        .await?;

    assert_eq!(layout.shops.len(), 2);
    let kept = layout.shops.iter().find(|s| s.id == existing.id).unwrap();
    assert_eq!(kept.base_rent, 12_500);
    assert_eq!(kept.category, "Food");
    assert_eq!(kept.status, ShopStatus::Occupied);
    assert_eq!(kept.vendor_id, Some(vendor.id));
    let added = layout.shops.iter().find(|s| s.shop_number == "Z-9").unwrap();
    assert_eq!(added.status, ShopStatus::Available);

    Ok(())
}

/// Tests an allocated shop cannot be moved.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn save_refuses_moving_allocated_shop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, existing) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    let existing = factory::layout::occupy_shop(db, existing, vendor.id).await?;

    let result = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 50.0,
            height: 20.0,
            shops: vec![shop(&existing.shop_number, 10.0, 10.0)],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an allocated shop cannot be dropped from the layout.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn save_refuses_removing_allocated_shop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, existing) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    factory::layout::occupy_shop(db, existing, vendor.id).await?;

    let result = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 50.0,
            height: 20.0,
            shops: vec![shop("NEW-1", 0.0, 0.0)],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a shop with application history cannot be dropped.
///
/// Expected: Err(AppError::BadRequest) and the shop still exists
#[tokio::test]
async fn save_refuses_removing_shop_with_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_manager, station, _layout, existing) =
        factory::helpers::create_station_with_shop(db).await?;
    let (_user, vendor) = factory::helpers::create_verified_vendor_user(db).await?;
    factory::shop_application::ShopApplicationFactory::new(db, vendor.id, station.id, existing.id)
        .status(entity::sea_orm_active_enums::ApplicationStatus::Rejected)
        .build()
        .await?;

    let service = LayoutService::new(db);
    let result = service
        .save(SaveLayoutParams {
            station_id: station.id,
            width: 50.0,
            height: 20.0,
            shops: vec![],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let layout = service.get(station.id).await?;
    assert_eq!(layout.shops.len(), 1);

    Ok(())
}

/// Tests saving a layout for a missing station.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn save_fails_for_missing_station() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LayoutService::new(db)
        .save(SaveLayoutParams {
            station_id: 404,
            width: 10.0,
            height: 10.0,
            shops: vec![],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
