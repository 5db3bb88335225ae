use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::trip_schedule;

/// Number of trip schedules still referencing a city as pickup or dropoff.
/// A non-zero count blocks deletion; run on the same transaction as the
/// delete so the check and the write commit atomically.
pub async fn city_dependents<C: ConnectionTrait>(conn: &C, city_id: i32) -> Result<u64, DbErr> {
    trip_schedule::Entity::find()
        .filter(
            Condition::any()
                .add(trip_schedule::Column::PickupCityId.eq(city_id))
                .add(trip_schedule::Column::DropoffCityId.eq(city_id)),
        )
        .count(conn)
        .await
}
