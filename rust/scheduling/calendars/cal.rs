use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::Result;
use crate::scheduling::calendars::named::{get_holidays_by_name, get_weekmask_by_name};
use crate::scheduling::DateRoll;

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general trading days. For
///   US exchanges these are `[Sat, Sun]`.
/// - `holidays`: which defines specific dates that may be exceptions to the general trading week,
///   and cannot be trading days.
///
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector
    /// of weekdays that are excluded from the trading week.
    pub fn new(holidays: Vec<NaiveDate>, week_mask: Vec<Weekday>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask: HashSet::from_iter(week_mask),
        }
    }

    /// Create a calendar from a named exchange, covering the given years.
    ///
    /// # Examples
    /// ```rust
    /// # use tradingcal::scheduling::{Cal, DateRoll, nd};
    /// let cal = Cal::try_from_name("nyse", 2022..=2022).unwrap();
    /// assert!(cal.is_holiday(&nd(2022, 4, 15))); // Good Friday
    /// assert!(cal.is_bus_day(&nd(2022, 4, 14)));
    /// ```
    pub fn try_from_name(name: &str, years: std::ops::RangeInclusive<i32>) -> Result<Cal> {
        Ok(Cal::new(
            get_holidays_by_name(name, years)?,
            get_weekmask_by_name(name)?,
        ))
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JSON;
    use crate::scheduling::nd;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![Weekday::Sat, Weekday::Sun])
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&nd(2015, 9, 7))); // In hol list
        assert!(!cal.is_holiday(&nd(2015, 9, 10))); // Not in hol list
        assert!(!cal.is_holiday(&nd(2024, 1, 6))); // Not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&nd(2015, 9, 7))); // Monday
        assert!(cal.is_weekday(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_weekday(&nd(2024, 1, 6))); // Saturday
        assert!(!cal.is_weekday(&nd(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_try_from_name_unknown() {
        assert!(Cal::try_from_name("lse", 2022..=2022).is_err());
    }

    #[test]
    fn test_cal_json() {
        let hcal = fixture_hol_cal();
        let js = hcal.to_json().unwrap();
        let hcal2 = Cal::from_json(&js).unwrap();
        assert_eq!(hcal, hcal2);
    }
}
