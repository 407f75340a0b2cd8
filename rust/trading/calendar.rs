use chrono::prelude::*;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scheduling::DateRoll;
use crate::sessions::Session;
use crate::trading::END_OF_WEEK_DAYS_OF_WEEK;

/// One calendar day of a merged trading calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarRow {
    /// Weekday number with Monday=0 and Sunday=6.
    pub day_of_week: u32,
    pub day_name: String,
    /// 1-based ordinal day within the year.
    pub day_of_year: u32,
    pub market_open: Option<DateTime<Utc>>,
    pub market_close: Option<DateTime<Utc>>,
    /// Whether daily options are listed for the date.
    pub opt: bool,
}

impl CalendarRow {
    /// Whether the exchange holds a session on the date.
    pub fn is_trading_day(&self) -> bool {
        self.market_open.is_some()
    }

    /// The session of the date, if the exchange is open.
    pub fn session(&self) -> Option<Session> {
        match (self.market_open, self.market_close) {
            (Some(open), Some(close)) => Some(Session::new(open, close)),
            _ => None,
        }
    }
}

/// A trading calendar: every calendar day of a range keyed by date, ascending.
///
/// Non-trading days are kept with empty `market_open` and `market_close`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingCalendar {
    pub(crate) rows: IndexMap<NaiveDate, CalendarRow>,
}

impl TradingCalendar {
    pub fn new(rows: IndexMap<NaiveDate, CalendarRow>) -> Self {
        TradingCalendar { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&CalendarRow> {
        self.rows.get(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.rows.contains_key(date)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, NaiveDate, CalendarRow> {
        self.rows.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.keys().copied().collect()
    }

    /// The dates on which the exchange is open, ascending.
    pub fn trading_days(&self) -> Vec<NaiveDate> {
        self.rows
            .iter()
            .filter(|(_, r)| r.is_trading_day())
            .map(|(d, _)| *d)
            .collect()
    }

    /// Return the rows flagged as options days, preserving date order.
    pub fn options_only(&self) -> TradingCalendar {
        self.filter(|_, r| r.opt)
    }

    /// Return the options days that fall on a Thursday or Friday.
    pub fn end_of_week(&self) -> TradingCalendar {
        self.filter(|_, r| r.opt && END_OF_WEEK_DAYS_OF_WEEK.contains(&r.day_of_week))
    }

    /// Return the rows matching `predicate`, preserving date order.
    pub fn filter<F>(&self, predicate: F) -> TradingCalendar
    where
        F: Fn(&NaiveDate, &CalendarRow) -> bool,
    {
        TradingCalendar {
            rows: self
                .rows
                .iter()
                .filter(|(d, r)| predicate(d, r))
                .map(|(d, r)| (*d, r.clone()))
                .collect(),
        }
    }
}

/// Trading days are business days. Dates outside the calendar are never holidays, so a roll
/// stops at the first date past either end.
impl DateRoll for TradingCalendar {
    fn is_weekday(&self, _date: &NaiveDate) -> bool {
        true
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.rows.get(date).is_some_and(|r| !r.is_trading_day())
    }
}

impl<'a> IntoIterator for &'a TradingCalendar {
    type Item = (&'a NaiveDate, &'a CalendarRow);
    type IntoIter = indexmap::map::Iter<'a, NaiveDate, CalendarRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn fmt_time(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for TradingCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}  {:>3}  {:<9}  {:>3}  {:<16}  {:<16}  {}",
            "date", "dow", "day_name", "doy", "market_open", "market_close", "opt"
        )?;
        let lines = self.rows.iter().map(|(date, r)| {
            format!(
                "{:<10}  {:>3}  {:<9}  {:>3}  {:<16}  {:<16}  {}",
                date.format("%Y-%m-%d"),
                r.day_of_week,
                r.day_name,
                r.day_of_year,
                fmt_time(&r.market_open),
                fmt_time(&r.market_close),
                r.opt
            )
        });
        write!(f, "{}", lines.format("\n"))
    }
}
