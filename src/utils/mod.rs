pub mod jwt;
pub mod recurrence;
pub mod validate;
