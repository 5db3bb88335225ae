pub mod city;
pub mod time_slot;
pub mod trip_schedule;
pub mod user;
pub mod vehicle;
pub mod vehicle_type;
