use chrono::prelude::*;

use crate::errors::{CalendarError, Result};

/// Create a `NaiveDate` from year, month and day.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Parse a `YYYY-MM-DD` string into a `NaiveDate`.
///
/// # Examples
/// ```rust
/// # use tradingcal::scheduling::{nd, parse_date};
/// assert_eq!(parse_date("2022-04-15").unwrap(), nd(2022, 4, 15));
/// assert!(parse_date("15/04/2022").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        value: value.to_string(),
    })
}

/// Return every calendar date between `start` and `end`, inclusive.
///
/// If `start` is after `end` the vector is empty.
pub fn date_range(start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| d <= end).collect()
}
