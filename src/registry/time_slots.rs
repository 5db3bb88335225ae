use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::time_slot;
use crate::error::{AppError, AppResult};
use crate::utils::validate;

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<time_slot::Model>> {
    Ok(time_slot::Entity::find()
        .order_by_asc(time_slot::Column::DepartureTime)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    departure: &str,
    arrival: &str,
) -> AppResult<time_slot::Model> {
    let (departure_time, arrival_time) = validate::validate_time_slot_input(departure, arrival)?;

    Ok(time_slot::ActiveModel {
        departure_time: Set(departure_time),
        arrival_time: Set(arrival_time),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

/// No referential guard here; the trip-schedule foreign key RESTRICTs the
/// delete at the store when the slot is still referenced.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<i32> {
    let result = time_slot::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Time slot not found".to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;
    use crate::utils::validate::ValidationError;

    #[tokio::test]
    async fn create_rejects_inverted_slot_without_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create(&db, "18:00", "09:00").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::OrderingViolation)
        ));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_missing_slot() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = delete(&db, 7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
