pub use sea_orm_migration::prelude::*;

mod m20240612_000001_create_admins;
mod m20240612_000002_create_cities;
mod m20240612_000003_create_vehicle_types;
mod m20240612_000004_create_vehicles;
mod m20240612_000005_create_time_slots;
mod m20240612_000006_create_trip_schedules;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_000001_create_admins::Migration),
            Box::new(m20240612_000002_create_cities::Migration),
            Box::new(m20240612_000003_create_vehicle_types::Migration),
            Box::new(m20240612_000004_create_vehicles::Migration),
            Box::new(m20240612_000005_create_time_slots::Migration),
            Box::new(m20240612_000006_create_trip_schedules::Migration),
        ]
    }
}
