//! New York Stock Exchange regular sessions, holidays and early closes.
//!
//! Holidays are generated by rule for any requested year:
//!
//! - New Year's Day: 1st January, moved to Monday when on a Sunday and not observed when on
//!   a Saturday.
//! - Martin Luther King Jr. Day: 3rd Monday in January, from 1998.
//! - Washington's Birthday: 3rd Monday in February.
//! - Good Friday.
//! - Memorial Day: last Monday in May.
//! - Juneteenth: 19th June, from 2022.
//! - Independence Day: 4th July.
//! - Labor Day: 1st Monday in September.
//! - Thanksgiving: 4th Thursday in November.
//! - Christmas: 25th December.
//!
//! Fixed-date holidays other than New Year's Day move to the Friday before when on a
//! Saturday and to the Monday after when on a Sunday. One-off closures are listed in
//! [`ADHOC_HOLIDAYS`].

use chrono::prelude::*;
use chrono::{Days, Weekday};
use chrono_tz::Tz;
use std::ops::RangeInclusive;

use crate::errors::Result;
use crate::scheduling::parse_date;

pub const WEEKMASK: &[Weekday] = &[Weekday::Sat, Weekday::Sun];

pub const TIMEZONE: Tz = chrono_tz::America::New_York;

/// Regular session open, `(hour, minute)` local time.
pub const OPEN: (u32, u32) = (9, 30);

/// Regular session close, `(hour, minute)` local time.
pub const CLOSE: (u32, u32) = (16, 0);

/// Session close on early closing days, `(hour, minute)` local time.
pub const EARLY_CLOSE: (u32, u32) = (13, 0);

/// Unscheduled full-day closures.
pub const ADHOC_HOLIDAYS: &[&str] = &[
    "2001-09-11", // September 11
    "2001-09-12",
    "2001-09-13",
    "2001-09-14",
    "2004-06-11", // President Reagan national day of mourning
    "2007-01-02", // President Ford national day of mourning
    "2012-10-29", // Hurricane Sandy
    "2012-10-30",
    "2018-12-05", // President G.H.W. Bush national day of mourning
    "2025-01-09", // President Carter national day of mourning
];

/// Return every NYSE full-day holiday falling in `years`, ascending.
pub fn holidays(years: RangeInclusive<i32>) -> Result<Vec<NaiveDate>> {
    let mut hols: Vec<NaiveDate> = years.clone().flat_map(rule_holidays).collect();
    for s in ADHOC_HOLIDAYS {
        let date = parse_date(s)?;
        if years.contains(&date.year()) {
            hols.push(date);
        }
    }
    hols.sort();
    hols.dedup();
    Ok(hols)
}

/// Return every NYSE early closing day falling in `years`, ascending.
///
/// - 3rd July on a Monday, Tuesday or Thursday from 1995, and on a Wednesday from 2013.
/// - The day after Thanksgiving, from 1993.
/// - 24th December on Monday to Thursday, from 1993.
pub fn early_closes(years: RangeInclusive<i32>) -> Result<Vec<NaiveDate>> {
    let hols = holidays(years.clone())?;
    let mut dates: Vec<NaiveDate> = Vec::new();
    for year in years {
        if let Some(d) = NaiveDate::from_ymd_opt(year, 7, 3) {
            let eligible = match d.weekday() {
                Weekday::Mon | Weekday::Tue | Weekday::Thu => year >= 1995,
                Weekday::Wed => year >= 2013,
                _ => false,
            };
            if eligible {
                dates.push(d);
            }
        }
        if year >= 1993 {
            if let Some(d) = nth_weekday(year, 11, Weekday::Thu, 4).and_then(|d| d.succ_opt()) {
                dates.push(d);
            }
            if let Some(d) = NaiveDate::from_ymd_opt(year, 12, 24) {
                if d.weekday().num_days_from_monday() <= 3 {
                    dates.push(d);
                }
            }
        }
    }
    dates.retain(|d| hols.binary_search(d).is_err());
    dates.sort();
    Ok(dates)
}

fn rule_holidays(year: i32) -> Vec<NaiveDate> {
    let mut hols: Vec<Option<NaiveDate>> = vec![
        new_years_day(year),
        nth_weekday(year, 2, Weekday::Mon, 3),
        easter_sunday(year).and_then(|d| d.checked_sub_days(Days::new(2))),
        last_weekday(year, 5, Weekday::Mon),
        NaiveDate::from_ymd_opt(year, 7, 4).and_then(observed),
        nth_weekday(year, 9, Weekday::Mon, 1),
        nth_weekday(year, 11, Weekday::Thu, 4),
        NaiveDate::from_ymd_opt(year, 12, 25).and_then(observed),
    ];
    if year >= 1998 {
        hols.push(nth_weekday(year, 1, Weekday::Mon, 3));
    }
    if year >= 2022 {
        hols.push(NaiveDate::from_ymd_opt(year, 6, 19).and_then(observed));
    }
    hols.into_iter().flatten().collect()
}

// A Saturday 1st January is not observed on the preceding Friday.
fn new_years_day(year: i32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
    match date.weekday() {
        Weekday::Sat => None,
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    }
}

fn observed(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    }
}

fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    nth_weekday(year, month, weekday, 5).or_else(|| nth_weekday(year, month, weekday, 4))
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2022), Some(nd(2022, 4, 17)));
        assert_eq!(easter_sunday(2024), Some(nd(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(nd(2025, 4, 20)));
        assert_eq!(easter_sunday(2038), Some(nd(2038, 4, 25)));
        assert_eq!(easter_sunday(1500), None);
    }

    #[test]
    fn test_holidays_2022() {
        let result = holidays(2022..=2022).unwrap();
        assert_eq!(
            result,
            vec![
                nd(2022, 1, 17), // MLK
                nd(2022, 2, 21), // Washington's Birthday
                nd(2022, 4, 15), // Good Friday
                nd(2022, 5, 30), // Memorial Day
                nd(2022, 6, 20), // Juneteenth (observed Monday)
                nd(2022, 7, 4),  // Independence Day
                nd(2022, 9, 5),  // Labor Day
                nd(2022, 11, 24), // Thanksgiving
                nd(2022, 12, 26), // Christmas (observed Monday)
            ]
        );
    }

    #[test]
    fn test_holidays_2023_new_year_observed_monday() {
        let result = holidays(2023..=2023).unwrap();
        assert_eq!(result.first(), Some(&nd(2023, 1, 2)));
        assert_eq!(result.len(), 10);
        assert!(result.contains(&nd(2023, 6, 19)));
        assert!(result.contains(&nd(2023, 4, 7)));
    }

    #[test]
    fn test_holidays_2026_independence_day_observed_friday() {
        let result = holidays(2026..=2026).unwrap();
        assert!(result.contains(&nd(2026, 7, 3)));
        assert!(!result.contains(&nd(2026, 7, 4)));
        assert!(result.contains(&nd(2026, 4, 3))); // Good Friday
    }

    #[test]
    fn test_holidays_adhoc() {
        let result = holidays(2025..=2025).unwrap();
        assert!(result.contains(&nd(2025, 1, 9)));
        assert_eq!(result.len(), 11);
        let result = holidays(2018..=2018).unwrap();
        assert!(result.contains(&nd(2018, 12, 5)));
    }

    #[test]
    fn test_holidays_rule_start_years() {
        let result = holidays(1997..=1997).unwrap();
        assert!(!result.contains(&nd(1997, 1, 20))); // no MLK yet
        let result = holidays(2021..=2021).unwrap();
        assert!(!result.contains(&nd(2021, 6, 18))); // no Juneteenth yet
        assert!(!result.contains(&nd(2021, 12, 31))); // Saturday New Year not observed
    }

    #[test]
    fn test_early_closes() {
        assert_eq!(early_closes(2022..=2022).unwrap(), vec![nd(2022, 11, 25)]);
        assert_eq!(
            early_closes(2023..=2023).unwrap(),
            vec![nd(2023, 7, 3), nd(2023, 11, 24)]
        );
        assert_eq!(
            early_closes(2024..=2024).unwrap(),
            vec![nd(2024, 7, 3), nd(2024, 11, 29), nd(2024, 12, 24)]
        );
    }
}
