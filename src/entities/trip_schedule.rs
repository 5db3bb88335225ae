use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How long a schedule definition remains active from its start date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "recurrence_type")]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    #[sea_orm(string_value = "day")]
    Day,
    #[sea_orm(string_value = "week")]
    Week,
    #[sea_orm(string_value = "month")]
    Month,
    #[sea_orm(string_value = "year")]
    Year,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trip_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pickup_city_id: i32,
    pub dropoff_city_id: i32,
    pub vehicle_type_id: i32,
    pub vehicle_id: i32,
    pub time_slot_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    pub recurrence_type: RecurrenceType,
    /// Weekday names the trip runs on; only present for weekly recurrence.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub recurrence_days: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::PickupCityId",
        to = "super::city::Column::Id"
    )]
    PickupCity,
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::DropoffCityId",
        to = "super::city::Column::Id"
    )]
    DropoffCity,
    #[sea_orm(
        belongs_to = "super::vehicle_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::vehicle_type::Column::Id"
    )]
    VehicleType,
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::time_slot::Entity",
        from = "Column::TimeSlotId",
        to = "super::time_slot::Column::Id"
    )]
    TimeSlot,
}

impl ActiveModelBehavior for ActiveModel {}
