//! This is the documentation for tradingcal
//!
//! Trading-day calendars for exchange-listed products. A calendar has one row for every
//! calendar day in a range, with the exchange session in UTC where the market is open and
//! a flag marking the days on which daily options list.
//!
//! - [`scheduling`] holds business day calendars, named exchange holiday rules, date ranges
//!   and standard calendar fields.
//! - [`sessions`] turns a named exchange into market open and close times.
//! - [`trading`] merges the two and flags options days.
//!
//! ```rust
//! use tradingcal::trading::TradingCal;
//! use tradingcal::scheduling::nd;
//!
//! let mut tc = TradingCal::new(Some(nd(2022, 5, 30)), Some(nd(2022, 6, 5))).unwrap();
//! let cal = tc.build_full_calendar(None, None).unwrap();
//! // Memorial Day: Tuesday takes over the Monday listing
//! assert!(!cal.get(&nd(2022, 5, 30)).unwrap().opt);
//! assert!(cal.get(&nd(2022, 5, 31)).unwrap().opt);
//! ```


pub mod errors;
pub mod json;
pub mod scheduling;
pub mod sessions;
pub mod trading;

pub use crate::errors::{CalendarError, Result};
pub use crate::json::JSON;
pub use crate::trading::{CalendarConfig, CalendarRow, TradingCal, TradingCalendar};
