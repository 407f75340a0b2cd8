//! Daily options days.
//!
//! Short-dated options on index-tracking instruments list on Mondays, Wednesdays and Fridays.
//! When one of those days is an exchange holiday the listing moves to a neighbouring day:
//! a Friday holiday moves it to the Thursday before, a Monday or Wednesday holiday to the
//! day after.

use chrono::prelude::*;
use log::{debug, warn};

use crate::scheduling::DateRoll;
use crate::trading::TradingCalendar;

/// Weekday numbers (Monday=0) on which daily options normally list.
pub const OPTIONS_DAYS_OF_WEEK: [u32; 3] = [0, 2, 4];

/// Weekday numbers (Monday=0) counted as the end of the trading week.
pub const END_OF_WEEK_DAYS_OF_WEEK: [u32; 2] = [3, 4];

/// Set `opt` on every Monday, Wednesday and Friday trading day and clear it everywhere else.
pub fn flag_options_days(calendar: &TradingCalendar) -> TradingCalendar {
    let mut flagged = calendar.clone();
    for row in flagged.rows.values_mut() {
        row.opt = row.is_trading_day() && OPTIONS_DAYS_OF_WEEK.contains(&row.day_of_week);
    }
    flagged
}

/// The holidays that fall on a Monday, Wednesday or Friday, ascending.
pub fn odd_days(calendar: &TradingCalendar) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = calendar
        .rows
        .iter()
        .filter(|(d, r)| calendar.is_non_bus_day(d) && OPTIONS_DAYS_OF_WEEK.contains(&r.day_of_week))
        .map(|(d, _)| *d)
        .collect();
    dates.sort();
    dates
}

/// The date that takes over the options listing of the odd day `date`.
///
/// Friday moves to the day before, any other day to the day after.
pub fn substitute_day(date: &NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Fri => date.pred_opt(),
        _ => date.succ_opt(),
    }
}

/// Move the options flag of every odd day onto its substitute day.
///
/// Flags are only ever added. Odd days are visited in ascending date order, so colliding
/// writes from neighbouring holidays resolve last-write-wins. A substitute outside the
/// calendar is dropped. A substitute that is itself a non-trading day is still flagged and a
/// warning is logged.
///
/// Apply exactly once to a freshly flagged calendar.
///
/// # Examples
/// ```rust
/// # use tradingcal::trading::TradingCal;
/// # use tradingcal::scheduling::nd;
/// let mut tc = TradingCal::new(Some(nd(2022, 4, 1)), Some(nd(2022, 4, 30))).unwrap();
/// let cal = tc.build_full_calendar(None, None).unwrap();
/// assert!(!cal.get(&nd(2022, 4, 15)).unwrap().opt); // Good Friday
/// assert!(cal.get(&nd(2022, 4, 14)).unwrap().opt);  // Thursday takes over
/// ```
pub fn adjust_odd_days(calendar: &TradingCalendar) -> TradingCalendar {
    let mut adjusted = calendar.clone();
    for date in odd_days(calendar) {
        let Some(target) = substitute_day(&date) else {
            continue;
        };
        match adjusted.rows.get_mut(&target) {
            Some(row) => {
                if !row.is_trading_day() {
                    let nearest = nearest_trading_day(calendar, &date, &target);
                    warn!(
                        "options day for holiday {date} moved to {target}, which is not a trading day (nearest trading day: {})",
                        nearest.map_or("none in range".to_string(), |d| d.to_string())
                    );
                }
                row.opt = true;
            }
            None => debug!("options substitute {target} for holiday {date} is outside the calendar"),
        }
    }
    adjusted
}

// Roll away from the odd day, through `target`, to the first trading day in the calendar.
fn nearest_trading_day(
    calendar: &TradingCalendar,
    date: &NaiveDate,
    target: &NaiveDate,
) -> Option<NaiveDate> {
    let rolled = if target > date {
        calendar.roll_forward_bus_day(target)?
    } else {
        calendar.roll_backward_bus_day(target)?
    };
    calendar
        .get(&rolled)
        .filter(|r| r.is_trading_day())
        .map(|_| rolled)
}

/// Rows flagged as options days, preserving date order.
pub fn options_only(calendar: &TradingCalendar) -> TradingCalendar {
    calendar.options_only()
}

/// Options days falling on a Thursday or Friday, preserving date order.
pub fn end_of_week(calendar: &TradingCalendar) -> TradingCalendar {
    calendar.end_of_week()
}
