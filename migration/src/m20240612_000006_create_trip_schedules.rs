use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20240612_000002_create_cities::City;
use super::m20240612_000003_create_vehicle_types::VehicleType;
use super::m20240612_000004_create_vehicles::Vehicle;
use super::m20240612_000005_create_time_slots::TimeSlot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create recurrence type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(RecurrenceType::Enum)
                    .values([
                        RecurrenceType::Day,
                        RecurrenceType::Week,
                        RecurrenceType::Month,
                        RecurrenceType::Year,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TripSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(TripSchedule::Id))
                    .col(integer(TripSchedule::PickupCityId).not_null())
                    .col(integer(TripSchedule::DropoffCityId).not_null())
                    .col(integer(TripSchedule::VehicleTypeId).not_null())
                    .col(integer(TripSchedule::VehicleId).not_null())
                    .col(integer(TripSchedule::TimeSlotId).not_null())
                    .col(decimal_len(TripSchedule::Price, 10, 2).not_null())
                    .col(date(TripSchedule::StartDate).not_null())
                    .col(date(TripSchedule::EndDate).not_null())
                    .col(
                        ColumnDef::new(TripSchedule::RecurrenceType)
                            .custom(RecurrenceType::Enum)
                            .not_null(),
                    )
                    .col(json_binary_null(TripSchedule::RecurrenceDays))
                    .col(
                        timestamp_with_time_zone(TripSchedule::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_schedule_pickup_city")
                            .from(TripSchedule::Table, TripSchedule::PickupCityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_schedule_dropoff_city")
                            .from(TripSchedule::Table, TripSchedule::DropoffCityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_schedule_vehicle_type")
                            .from(TripSchedule::Table, TripSchedule::VehicleTypeId)
                            .to(VehicleType::Table, VehicleType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_schedule_vehicle")
                            .from(TripSchedule::Table, TripSchedule::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_schedule_time_slot")
                            .from(TripSchedule::Table, TripSchedule::TimeSlotId)
                            .to(TimeSlot::Table, TimeSlot::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripSchedule::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(RecurrenceType::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripSchedule {
    Table,
    Id,
    PickupCityId,
    DropoffCityId,
    VehicleTypeId,
    VehicleId,
    TimeSlotId,
    Price,
    StartDate,
    EndDate,
    RecurrenceType,
    RecurrenceDays,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum RecurrenceType {
    #[sea_orm(iden = "recurrence_type")]
    Enum,
    #[sea_orm(iden = "day")]
    Day,
    #[sea_orm(iden = "week")]
    Week,
    #[sea_orm(iden = "month")]
    Month,
    #[sea_orm(iden = "year")]
    Year,
}
