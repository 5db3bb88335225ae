use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use thiserror::Error;

use crate::entities::trip_schedule::RecurrenceType;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported recurrence kind: {0}")]
pub struct UnsupportedRecurrenceKind(pub String);

impl FromStr for RecurrenceType {
    type Err = UnsupportedRecurrenceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(RecurrenceType::Day),
            "week" => Ok(RecurrenceType::Week),
            "month" => Ok(RecurrenceType::Month),
            "year" => Ok(RecurrenceType::Year),
            other => Err(UnsupportedRecurrenceKind(other.to_string())),
        }
    }
}

/// Inclusive end date of a schedule: one unit of `kind` past `start`, minus a
/// day. Month and year steps clamp to the last day of the target month when
/// the start day does not exist there (Jan 31 + month lands on Feb 29 in a
/// leap year, so the schedule ends Feb 28).
pub fn end_date(start: NaiveDate, kind: &RecurrenceType) -> NaiveDate {
    let stepped = match kind {
        RecurrenceType::Day => start.checked_add_days(Days::new(1)),
        RecurrenceType::Week => start.checked_add_days(Days::new(7)),
        RecurrenceType::Month => start.checked_add_months(Months::new(1)),
        RecurrenceType::Year => start.checked_add_months(Months::new(12)),
    };

    // Only representable near NaiveDate::MAX, which no calendar form reaches.
    stepped
        .and_then(|date| date.checked_sub_days(Days::new(1)))
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_spans_seven_days_inclusive() {
        assert_eq!(
            end_date(date(2024, 1, 1), &RecurrenceType::Week),
            date(2024, 1, 7)
        );
    }

    #[test]
    fn day_ends_on_the_start_date() {
        assert_eq!(
            end_date(date(2024, 1, 1), &RecurrenceType::Day),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn month_spans_one_calendar_month() {
        assert_eq!(
            end_date(date(2024, 3, 15), &RecurrenceType::Month),
            date(2024, 4, 14)
        );
    }

    #[test]
    fn month_clamps_into_short_months() {
        // Jan 31 + 1 month clamps to Feb 29 (2024 is a leap year)
        assert_eq!(
            end_date(date(2024, 1, 31), &RecurrenceType::Month),
            date(2024, 2, 28)
        );
        assert_eq!(
            end_date(date(2023, 1, 31), &RecurrenceType::Month),
            date(2023, 2, 27)
        );
    }

    #[test]
    fn year_clamps_past_leap_day() {
        assert_eq!(
            end_date(date(2024, 2, 29), &RecurrenceType::Year),
            date(2025, 2, 27)
        );
        assert_eq!(
            end_date(date(2024, 6, 1), &RecurrenceType::Year),
            date(2025, 5, 31)
        );
    }

    #[test]
    fn span_covers_exactly_one_unit() {
        for (y, m, d) in [(2023, 3, 15), (2024, 1, 1), (2024, 12, 31), (2025, 6, 30)] {
            let start = date(y, m, d);
            assert_eq!(end_date(start, &RecurrenceType::Day), start);
            assert_eq!(
                end_date(start, &RecurrenceType::Week) - start,
                chrono::Duration::days(6)
            );
            assert!(end_date(start, &RecurrenceType::Month) >= start);
            assert!(end_date(start, &RecurrenceType::Year) > start);
        }
    }

    #[test]
    fn unrecognized_kind_is_rejected() {
        let err = "fortnight".parse::<RecurrenceType>().unwrap_err();
        assert_eq!(err, UnsupportedRecurrenceKind("fortnight".to_string()));
        assert!("Day".parse::<RecurrenceType>().is_err());
    }
}
