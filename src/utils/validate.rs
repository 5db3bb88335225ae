use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::entities::trip_schedule::RecurrenceType;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Every invalid or missing field of the submitted form, not just the
    /// first one found.
    #[error("invalid or missing fields: {}", .0.join(", "))]
    Fields(Vec<String>),
    #[error("not in HH:MM format: {}", .0.join(", "))]
    InvalidFormat(Vec<String>),
    #[error("arrival time must be after departure time")]
    OrderingViolation,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<String> {
        match self {
            ValidationError::Fields(fields) | ValidationError::InvalidFormat(fields) => {
                fields.clone()
            }
            ValidationError::OrderingViolation => vec!["arrival_time".to_string()],
        }
    }
}

/// Raw trip-schedule form fields as submitted by the admin panel.
#[derive(Debug, Clone, Deserialize)]
pub struct TripInput {
    pub pickup_city_id: i32,
    pub dropoff_city_id: i32,
    pub vehicle_type_id: i32,
    pub vehicle_id: i32,
    pub time_slot_id: i32,
    pub price: Decimal,
    pub start_date: String,
    pub recurrence_type: String,
    pub recurrence_days: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTrip {
    pub pickup_city_id: i32,
    pub dropoff_city_id: i32,
    pub vehicle_type_id: i32,
    pub vehicle_id: i32,
    pub time_slot_id: i32,
    pub price: Decimal,
    pub start_date: NaiveDate,
    pub recurrence: RecurrenceType,
    pub recurrence_days: Option<Vec<String>>,
}

/// Field-level checks for a new trip schedule. Pure: no store access.
pub fn validate_trip_input(input: &TripInput) -> Result<ValidatedTrip, ValidationError> {
    let mut invalid = Vec::new();

    for (field, value) in [
        ("pickup_city_id", input.pickup_city_id),
        ("dropoff_city_id", input.dropoff_city_id),
        ("vehicle_type_id", input.vehicle_type_id),
        ("vehicle_id", input.vehicle_id),
        ("time_slot_id", input.time_slot_id),
    ] {
        if value <= 0 {
            invalid.push(field.to_string());
        }
    }

    if input.price <= Decimal::ZERO {
        invalid.push("price".to_string());
    }

    let start_date = NaiveDate::parse_from_str(&input.start_date, DATE_FORMAT).ok();
    if start_date.is_none() {
        invalid.push("start_date".to_string());
    }

    let recurrence = input.recurrence_type.parse::<RecurrenceType>().ok();
    if recurrence.is_none() {
        invalid.push("recurrence_type".to_string());
    }

    match (start_date, recurrence) {
        (Some(start_date), Some(recurrence)) if invalid.is_empty() => Ok(ValidatedTrip {
            pickup_city_id: input.pickup_city_id,
            dropoff_city_id: input.dropoff_city_id,
            vehicle_type_id: input.vehicle_type_id,
            vehicle_id: input.vehicle_id,
            time_slot_id: input.time_slot_id,
            price: input.price,
            start_date,
            // The weekday set only means something for weekly schedules.
            recurrence_days: match recurrence {
                RecurrenceType::Week => input.recurrence_days.clone(),
                _ => None,
            },
            recurrence,
        }),
        _ => Err(ValidationError::Fields(invalid)),
    }
}

/// Parse a departure/arrival pair and enforce strict same-day ordering.
pub fn validate_time_slot_input(
    departure: &str,
    arrival: &str,
) -> Result<(NaiveTime, NaiveTime), ValidationError> {
    let dep = NaiveTime::parse_from_str(departure.trim(), TIME_FORMAT).ok();
    let arr = NaiveTime::parse_from_str(arrival.trim(), TIME_FORMAT).ok();

    let mut malformed = Vec::new();
    if dep.is_none() {
        malformed.push("departure_time".to_string());
    }
    if arr.is_none() {
        malformed.push("arrival_time".to_string());
    }

    match (dep, arr) {
        (Some(dep), Some(arr)) if arr > dep => Ok((dep, arr)),
        (Some(_), Some(_)) => Err(ValidationError::OrderingViolation),
        _ => Err(ValidationError::InvalidFormat(malformed)),
    }
}

/// Reject empty (after trimming) reference-data fields.
pub fn validate_required(field: &str, value: &str) -> Result<String, ValidationError> {
    match non_empty(value) {
        Some(value) => Ok(value.to_string()),
        None => Err(ValidationError::Fields(vec![field.to_string()])),
    }
}

/// Vehicle form: both fields checked, all violations reported together.
pub fn validate_vehicle_input(
    vehicle_number: &str,
    driver_name: &str,
) -> Result<(String, String), ValidationError> {
    let mut missing = Vec::new();

    let number = non_empty(vehicle_number);
    if number.is_none() {
        missing.push("vehicle_number".to_string());
    }

    let driver = non_empty(driver_name);
    if driver.is_none() {
        missing.push("driver_name".to_string());
    }

    match (number, driver) {
        (Some(number), Some(driver)) => Ok((number.to_string(), driver.to_string())),
        _ => Err(ValidationError::Fields(missing)),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_input() -> TripInput {
        TripInput {
            pickup_city_id: 1,
            dropoff_city_id: 2,
            vehicle_type_id: 1,
            vehicle_id: 3,
            time_slot_id: 1,
            price: Decimal::new(2500, 2),
            start_date: "2024-01-01".to_string(),
            recurrence_type: "week".to_string(),
            recurrence_days: Some(vec!["Monday".to_string(), "Friday".to_string()]),
        }
    }

    #[test]
    fn accepts_well_formed_trip() {
        let trip = validate_trip_input(&trip_input()).unwrap();
        assert_eq!(trip.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(trip.recurrence, RecurrenceType::Week);
        assert_eq!(
            trip.recurrence_days,
            Some(vec!["Monday".to_string(), "Friday".to_string()])
        );
    }

    #[test]
    fn rejects_non_positive_price() {
        for price in [Decimal::ZERO, Decimal::new(-500, 2)] {
            let mut input = trip_input();
            input.price = price;
            let err = validate_trip_input(&input).unwrap_err();
            assert_eq!(err, ValidationError::Fields(vec!["price".to_string()]));
        }
    }

    #[test]
    fn reports_every_violated_field_at_once() {
        let mut input = trip_input();
        input.vehicle_id = 0;
        input.price = Decimal::ZERO;
        input.start_date = "01/01/2024".to_string();
        input.recurrence_type = "fortnight".to_string();

        let err = validate_trip_input(&input).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["vehicle_id", "price", "start_date", "recurrence_type"]
        );
    }

    #[test]
    fn drops_weekdays_for_non_weekly_recurrence() {
        let mut input = trip_input();
        input.recurrence_type = "month".to_string();
        let trip = validate_trip_input(&input).unwrap();
        assert_eq!(trip.recurrence, RecurrenceType::Month);
        assert_eq!(trip.recurrence_days, None);
    }

    #[test]
    fn accepts_ordered_time_slot() {
        let (dep, arr) = validate_time_slot_input("06:30", "10:15").unwrap();
        assert_eq!(dep, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(arr, NaiveTime::from_hms_opt(10, 15, 0).unwrap());
    }

    #[test]
    fn rejects_arrival_not_after_departure() {
        assert_eq!(
            validate_time_slot_input("10:00", "08:00").unwrap_err(),
            ValidationError::OrderingViolation
        );
        // Equal times are an ordering violation too
        assert_eq!(
            validate_time_slot_input("10:00", "10:00").unwrap_err(),
            ValidationError::OrderingViolation
        );
    }

    #[test]
    fn rejects_malformed_times() {
        let err = validate_time_slot_input("6.30", "25:00").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat(vec![
                "departure_time".to_string(),
                "arrival_time".to_string()
            ])
        );
    }

    #[test]
    fn rejects_blank_names() {
        assert!(validate_required("name", "   ").is_err());
        assert_eq!(validate_required("name", " Lagos ").unwrap(), "Lagos");

        let err = validate_vehicle_input("", "  ").unwrap_err();
        assert_eq!(err.fields(), vec!["vehicle_number", "driver_name"]);
    }
}
