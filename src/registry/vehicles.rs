use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::vehicle;
use crate::error::AppResult;
use crate::utils::validate;

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<vehicle::Model>> {
    Ok(vehicle::Entity::find()
        .order_by_asc(vehicle::Column::VehicleNumber)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    vehicle_number: &str,
    driver_name: &str,
) -> AppResult<vehicle::Model> {
    let (vehicle_number, driver_name) =
        validate::validate_vehicle_input(vehicle_number, driver_name)?;

    Ok(vehicle::ActiveModel {
        vehicle_number: Set(vehicle_number),
        driver_name: Set(driver_name),
        ..Default::default()
    }
    .insert(db)
    .await?)
}
