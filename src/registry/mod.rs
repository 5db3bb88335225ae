//! CRUD operations for the back office's reference data and trip schedules,
//! independent of the HTTP layer that wraps them. Every mutation runs its
//! uniqueness or dependency checks inside the same transaction as the write.

pub mod cities;
pub mod guard;
pub mod schedules;
pub mod time_slots;
pub mod vehicle_types;
pub mod vehicles;
