//! Create business day [`Cal`] calendars, resolve [`DateRange`] values and build
//! [`StandardCalendar`] tables of date attributes.
//!
//! # Calendars
//!
//! A [`Cal`] is a holiday list combined with a weekend mask. All calendars implement the
//! [`DateRoll`] trait which answers whether a date is a business (trading) day and provides
//! simple date rolling and date ranges. Exchange calendars are generated by name from rules,
//! see [`named`](calendars::named).
//!
//! ### Example
//! This example creates the NYSE calendar for 2022 and rolls Good Friday, 15th April, to the
//! neighbouring trading days.
//! ```rust
//! # use tradingcal::scheduling::{Cal, nd, DateRoll};
//! let cal = Cal::try_from_name("NYSE", 2022..=2022).unwrap();
//! assert_eq!(Some(nd(2022, 4, 18)), cal.roll_forward_bus_day(&nd(2022, 4, 15)));
//! assert_eq!(Some(nd(2022, 4, 14)), cal.roll_backward_bus_day(&nd(2022, 4, 15)));
//! ```
//!
//! # Standard Calendars
//!
//! A [`StandardCalendar`] has one row for every calendar day in a range, with the columns
//! requested as [`CalendarField`] values.
//!
//! ### Example
//! ```rust
//! # use tradingcal::scheduling::{nd, build_standard_calendar, parse_fields, FieldValue, CalendarField};
//! let fields = parse_fields(&["date", "day_of_week", "week"]).unwrap();
//! let cal = build_standard_calendar(&nd(2022, 1, 1), &nd(2022, 12, 31), Some(&fields)).unwrap();
//! assert_eq!(cal.len(), 365);
//! let row = cal.get(&nd(2022, 1, 1)).unwrap();
//! assert_eq!(row.get(&CalendarField::Week), Some(&FieldValue::Int(52)));
//! ```

pub mod calendars;
mod dates;
mod fields;
mod range;
mod standard;

mod serde;

pub use crate::scheduling::{
    calendars::{canonical_name, named, Cal, DateRoll, SessionHours},
    dates::{date_range, nd, parse_date},
    fields::{day_name, day_of_week, parse_fields, CalendarField, FieldValue},
    range::{DateRange, DEFAULT_HORIZON_DAYS},
    standard::{build_standard_calendar, StandardCalendar, StandardRow},
};
