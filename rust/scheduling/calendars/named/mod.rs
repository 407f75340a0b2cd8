//! Static data and rules for pre-existing named exchange calendars.
//!

pub mod nyse;

use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::errors::{CalendarError, Result};

type DateRule = fn(RangeInclusive<i32>) -> Result<Vec<NaiveDate>>;

/// Local session hours of a named exchange.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionHours {
    pub timezone: Tz,
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub early_close: NaiveTime,
}

/// Map an exchange name or alias to its canonical key, e.g. `"XNYS"` to `"nyse"`.
pub fn canonical_name(name: &str) -> Result<&'static str> {
    let aliases: HashMap<&str, &'static str> = HashMap::from([("nyse", "nyse"), ("xnys", "nyse")]);
    match aliases.get(name.trim().to_lowercase().as_str()) {
        None => Err(CalendarError::UnknownExchange(name.to_string())),
        Some(value) => Ok(*value),
    }
}

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<Weekday>> {
    let hmap: HashMap<&str, &[Weekday]> = HashMap::from([("nyse", nyse::WEEKMASK)]);
    match hmap.get(canonical_name(name)?) {
        None => Err(CalendarError::UnknownExchange(name.to_string())),
        Some(value) => Ok(value.to_vec()),
    }
}

pub(crate) fn get_holidays_by_name(
    name: &str,
    years: RangeInclusive<i32>,
) -> Result<Vec<NaiveDate>> {
    let hmap: HashMap<&str, DateRule> = HashMap::from([("nyse", nyse::holidays as DateRule)]);
    match hmap.get(canonical_name(name)?) {
        None => Err(CalendarError::UnknownExchange(name.to_string())),
        Some(rule) => rule(years),
    }
}

pub(crate) fn get_early_closes_by_name(
    name: &str,
    years: RangeInclusive<i32>,
) -> Result<Vec<NaiveDate>> {
    let hmap: HashMap<&str, DateRule> = HashMap::from([("nyse", nyse::early_closes as DateRule)]);
    match hmap.get(canonical_name(name)?) {
        None => Err(CalendarError::UnknownExchange(name.to_string())),
        Some(rule) => rule(years),
    }
}

pub(crate) fn get_session_hours_by_name(name: &str) -> Result<SessionHours> {
    match canonical_name(name)? {
        "nyse" => Ok(SessionHours {
            timezone: nyse::TIMEZONE,
            open: hm(nyse::OPEN),
            close: hm(nyse::CLOSE),
            early_close: hm(nyse::EARLY_CLOSE),
        }),
        _ => Err(CalendarError::UnknownExchange(name.to_string())),
    }
}

// Session constants are static data; an invalid one is a programming error.
fn hm((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("static session time is invalid.")
}
