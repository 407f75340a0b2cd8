use chrono::prelude::*;
use indexmap::IndexMap;
use log::debug;

use crate::errors::{CalendarError, Result};
use crate::scheduling::{CalendarField, StandardCalendar, StandardRow};
use crate::sessions::Sessions;
use crate::trading::{CalendarRow, TradingCalendar};

/// Join exchange sessions onto a standard calendar by date.
///
/// Every row of `standard` is kept. Dates without a session get empty `market_open` and
/// `market_close`. Sessions for dates outside `standard` are ignored. The `opt` flag of every
/// row is `false`; see [`flag_options_days`](crate::trading::flag_options_days).
///
/// `standard` must carry the default [`CalendarField`] columns.
pub fn merge_sessions(standard: &StandardCalendar, sessions: &Sessions) -> Result<TradingCalendar> {
    let mut rows: IndexMap<NaiveDate, CalendarRow> = IndexMap::with_capacity(standard.len());
    for (date, srow) in standard.rows.iter() {
        let session = sessions.get(date);
        rows.insert(
            *date,
            CalendarRow {
                day_of_week: int_field(date, srow, CalendarField::DayOfWeek)?,
                day_name: text_field(date, srow, CalendarField::DayName)?,
                day_of_year: int_field(date, srow, CalendarField::DayOfYear)?,
                market_open: session.map(|s| s.market_open),
                market_close: session.map(|s| s.market_close),
                opt: false,
            },
        );
    }
    let unmatched = sessions.keys().filter(|d| !rows.contains_key(*d)).count();
    if unmatched > 0 {
        debug!("ignored {unmatched} sessions outside the standard calendar");
    }
    Ok(TradingCalendar::new(rows))
}

fn int_field(date: &NaiveDate, row: &StandardRow, field: CalendarField) -> Result<u32> {
    row.get(&field)
        .and_then(|v| v.as_int())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(CalendarError::MissingField { date: *date, field })
}

fn text_field(date: &NaiveDate, row: &StandardRow, field: CalendarField) -> Result<String> {
    row.get(&field)
        .and_then(|v| v.as_text())
        .map(String::from)
        .ok_or(CalendarError::MissingField { date: *date, field })
}
