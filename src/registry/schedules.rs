use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use crate::entities::{city, time_slot, trip_schedule, vehicle, vehicle_type};
use crate::error::{AppError, AppResult};
use crate::utils::recurrence;
use crate::utils::validate::{self, TripInput};

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<trip_schedule::Model>> {
    Ok(trip_schedule::Entity::find()
        .order_by_asc(trip_schedule::Column::StartDate)
        .order_by_asc(trip_schedule::Column::Id)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    input: &TripInput,
) -> AppResult<trip_schedule::Model> {
    let trip = validate::validate_trip_input(input)?;

    if trip.pickup_city_id == trip.dropoff_city_id {
        return Err(AppError::BadRequest(
            "Pickup and dropoff city must be different".to_string(),
        ));
    }

    let txn = db.begin().await?;

    // Every foreign key must point at an existing row before the insert
    require_city(&txn, trip.pickup_city_id, "pickup city").await?;
    require_city(&txn, trip.dropoff_city_id, "dropoff city").await?;

    vehicle_type::Entity::find_by_id(trip.vehicle_type_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid vehicle type".to_string()))?;

    vehicle::Entity::find_by_id(trip.vehicle_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid vehicle".to_string()))?;

    time_slot::Entity::find_by_id(trip.time_slot_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid time slot".to_string()))?;

    let end_date = recurrence::end_date(trip.start_date, &trip.recurrence);

    let created = trip_schedule::ActiveModel {
        pickup_city_id: Set(trip.pickup_city_id),
        dropoff_city_id: Set(trip.dropoff_city_id),
        vehicle_type_id: Set(trip.vehicle_type_id),
        vehicle_id: Set(trip.vehicle_id),
        time_slot_id: Set(trip.time_slot_id),
        price: Set(trip.price),
        start_date: Set(trip.start_date),
        end_date: Set(end_date),
        recurrence_type: Set(trip.recurrence.clone()),
        recurrence_days: Set(trip
            .recurrence_days
            .as_ref()
            .map(|days| serde_json::json!(days))),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(created)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<i32> {
    let result = trip_schedule::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Trip schedule not found".to_string()));
    }

    Ok(id)
}

async fn require_city<C: ConnectionTrait>(conn: &C, id: i32, label: &str) -> AppResult<city::Model> {
    city::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}", label)))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::utils::validate::ValidationError;

    fn input() -> TripInput {
        TripInput {
            pickup_city_id: 1,
            dropoff_city_id: 2,
            vehicle_type_id: 1,
            vehicle_id: 1,
            time_slot_id: 1,
            price: Decimal::new(150000, 2),
            start_date: "2024-01-01".to_string(),
            recurrence_type: "day".to_string(),
            recurrence_days: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_zero_price_without_inserting() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let mut bad = input();
        bad.price = Decimal::ZERO;

        let err = create(&db, &bad).await.unwrap_err();
        match err {
            AppError::Validation(ValidationError::Fields(fields)) => {
                assert_eq!(fields, vec!["price".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        // Nothing reached the store
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_same_pickup_and_dropoff() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let mut bad = input();
        bad.dropoff_city_id = bad.pickup_city_id;

        let err = create(&db, &bad).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_pickup_city() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<city::Model>::new()])
            .into_connection();

        let err = create(&db, &input()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
