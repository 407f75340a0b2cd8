//! Merged trading calendars with daily options days.
//!
//! A [`TradingCalendar`] holds one [`CalendarRow`] per calendar day. Rows carry the standard
//! date attributes, the exchange session in UTC when the market is open, and the `opt` flag
//! marking daily options days.
//!
//! The full calendar is built in three steps:
//!
//! - [`merge_sessions`] joins exchange sessions onto a standard calendar.
//! - [`flag_options_days`] flags Monday, Wednesday and Friday trading days.
//! - [`adjust_odd_days`] moves the flag of every Monday, Wednesday or Friday holiday onto its
//!   [`substitute_day`].
//!
//! [`TradingCal`] runs all three against an exchange:
//!
//! ```rust
//! # use tradingcal::trading::TradingCal;
//! # use tradingcal::scheduling::nd;
//! let mut tc = TradingCal::new(Some(nd(2024, 12, 23)), Some(nd(2024, 12, 29))).unwrap();
//! let cal = tc.build_full_calendar(None, None).unwrap();
//! assert_eq!(
//!     cal.options_only().dates(),
//!     vec![nd(2024, 12, 23), nd(2024, 12, 26), nd(2024, 12, 27)]
//! );
//! assert_eq!(cal.end_of_week().dates(), vec![nd(2024, 12, 26), nd(2024, 12, 27)]);
//! ```

mod builder;
mod calendar;
mod config;
mod merge;
mod options;
mod serde;

pub use crate::trading::builder::{TradingCal, DEFAULT_EXCHANGE};
pub use crate::trading::calendar::{CalendarRow, TradingCalendar};
pub use crate::trading::config::CalendarConfig;
pub use crate::trading::merge::merge_sessions;
pub use crate::trading::options::{
    adjust_odd_days, end_of_week, flag_options_days, odd_days, options_only, substitute_day,
    END_OF_WEEK_DAYS_OF_WEEK, OPTIONS_DAYS_OF_WEEK,
};
