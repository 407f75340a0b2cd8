use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalendarError, Result};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A date attribute that can be requested as a column of a standard calendar.
///
/// Each variant maps to a pure function of the date, see [`CalendarField::value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarField {
    /// The row key.
    Date,
    /// Weekday number with Monday=0 and Sunday=6.
    DayOfWeek,
    /// Full English weekday name.
    DayName,
    /// 1-based ordinal day within the year.
    DayOfYear,
    /// Day of the month.
    Day,
    /// Month number, 1 to 12.
    Month,
    /// Full English month name.
    MonthName,
    Year,
    /// Calendar quarter, 1 to 4.
    Quarter,
    /// ISO week number.
    Week,
    IsMonthStart,
    IsMonthEnd,
}

/// The value of a [`CalendarField`] for a particular date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl CalendarField {
    /// The fields of a standard calendar when none are requested.
    pub const DEFAULT: [CalendarField; 4] = [
        CalendarField::Date,
        CalendarField::DayOfWeek,
        CalendarField::DayName,
        CalendarField::DayOfYear,
    ];

    /// The column name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarField::Date => "date",
            CalendarField::DayOfWeek => "day_of_week",
            CalendarField::DayName => "day_name",
            CalendarField::DayOfYear => "day_of_year",
            CalendarField::Day => "day",
            CalendarField::Month => "month",
            CalendarField::MonthName => "month_name",
            CalendarField::Year => "year",
            CalendarField::Quarter => "quarter",
            CalendarField::Week => "week",
            CalendarField::IsMonthStart => "is_month_start",
            CalendarField::IsMonthEnd => "is_month_end",
        }
    }

    /// Derive the value of the field for `date`.
    ///
    /// # Examples
    /// ```rust
    /// # use tradingcal::scheduling::{nd, CalendarField, FieldValue};
    /// let date = nd(2022, 4, 15);
    /// assert_eq!(CalendarField::DayOfWeek.value(&date), FieldValue::Int(4));
    /// assert_eq!(CalendarField::DayName.value(&date), FieldValue::Text("Friday".to_string()));
    /// assert_eq!(CalendarField::DayOfYear.value(&date), FieldValue::Int(105));
    /// ```
    pub fn value(&self, date: &NaiveDate) -> FieldValue {
        match self {
            CalendarField::Date => FieldValue::Date(*date),
            CalendarField::DayOfWeek => FieldValue::Int(day_of_week(date).into()),
            CalendarField::DayName => FieldValue::Text(day_name(date).to_string()),
            CalendarField::DayOfYear => FieldValue::Int(date.ordinal().into()),
            CalendarField::Day => FieldValue::Int(date.day().into()),
            CalendarField::Month => FieldValue::Int(date.month().into()),
            CalendarField::MonthName => {
                FieldValue::Text(MONTH_NAMES[date.month0() as usize].to_string())
            }
            CalendarField::Year => FieldValue::Int(date.year().into()),
            CalendarField::Quarter => FieldValue::Int((date.month0() / 3 + 1).into()),
            CalendarField::Week => FieldValue::Int(date.iso_week().week().into()),
            CalendarField::IsMonthStart => FieldValue::Bool(date.day() == 1),
            CalendarField::IsMonthEnd => FieldValue::Bool(
                date.succ_opt()
                    .map_or(true, |next| next.month() != date.month()),
            ),
        }
    }
}

/// Weekday number with Monday=0 and Sunday=6.
pub fn day_of_week(date: &NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Full English weekday name.
pub fn day_name(date: &NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarField {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(CalendarField::Date),
            "day_of_week" | "dayofweek" | "weekday" => Ok(CalendarField::DayOfWeek),
            "day_name" => Ok(CalendarField::DayName),
            "day_of_year" | "dayofyear" => Ok(CalendarField::DayOfYear),
            "day" => Ok(CalendarField::Day),
            "month" => Ok(CalendarField::Month),
            "month_name" => Ok(CalendarField::MonthName),
            "year" => Ok(CalendarField::Year),
            "quarter" => Ok(CalendarField::Quarter),
            "week" | "weekofyear" => Ok(CalendarField::Week),
            "is_month_start" => Ok(CalendarField::IsMonthStart),
            "is_month_end" => Ok(CalendarField::IsMonthEnd),
            _ => Err(CalendarError::UnsupportedField(s.to_string())),
        }
    }
}

/// Parse a list of field names, rejecting any that are unsupported.
pub fn parse_fields<S: AsRef<str>>(names: &[S]) -> Result<Vec<CalendarField>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    #[test]
    fn test_day_of_week_monday_zero() {
        assert_eq!(day_of_week(&nd(2022, 4, 11)), 0);
        assert_eq!(day_of_week(&nd(2022, 4, 17)), 6);
        assert_eq!(day_name(&nd(2022, 4, 13)), "Wednesday");
    }

    #[test]
    fn test_values() {
        let date = nd(2024, 12, 31);
        assert_eq!(CalendarField::DayOfYear.value(&date), FieldValue::Int(366));
        assert_eq!(CalendarField::Quarter.value(&date), FieldValue::Int(4));
        assert_eq!(CalendarField::Week.value(&date), FieldValue::Int(1));
        assert_eq!(CalendarField::IsMonthEnd.value(&date), FieldValue::Bool(true));
        assert_eq!(CalendarField::IsMonthStart.value(&date), FieldValue::Bool(false));
        assert_eq!(
            CalendarField::MonthName.value(&date),
            FieldValue::Text("December".to_string())
        );
        assert_eq!(CalendarField::Date.value(&date), FieldValue::Date(date));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("day_of_week".parse::<CalendarField>().unwrap(), CalendarField::DayOfWeek);
        assert_eq!("DayOfWeek".parse::<CalendarField>().unwrap(), CalendarField::DayOfWeek);
        assert_eq!("weekofyear".parse::<CalendarField>().unwrap(), CalendarField::Week);
        let result = "days_in_month".parse::<CalendarField>();
        assert!(matches!(result, Err(CalendarError::UnsupportedField(ref s)) if s == "days_in_month"));
    }

    #[test]
    fn test_parse_fields() {
        let result = parse_fields(&["date", "day_name"]).unwrap();
        assert_eq!(result, vec![CalendarField::Date, CalendarField::DayName]);
        assert!(parse_fields(&["date", "tz"]).is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for field in CalendarField::DEFAULT {
            assert_eq!(field.name().parse::<CalendarField>().unwrap(), field);
            assert_eq!(field.to_string(), field.name());
        }
    }
}
