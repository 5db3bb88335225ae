use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::vehicle_type;
use crate::error::AppResult;
use crate::utils::validate;

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<vehicle_type::Model>> {
    Ok(vehicle_type::Entity::find()
        .order_by_asc(vehicle_type::Column::Name)
        .all(db)
        .await?)
}

pub async fn create(db: &DatabaseConnection, name: &str) -> AppResult<vehicle_type::Model> {
    let name = validate::validate_required("name", name)?;

    Ok(vehicle_type::ActiveModel {
        name: Set(name),
        ..Default::default()
    }
    .insert(db)
    .await?)
}
