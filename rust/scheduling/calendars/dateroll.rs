use chrono::prelude::*;

use crate::scheduling::date_range;

/// Simple date adjustment defining trading days, holidays and rolling.
pub trait DateRoll {
    /// Returns whether the date is part of the general trading week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular trading week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a business day, i.e. part of the trading week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in the trading week or a
    /// specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDate) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    ///
    /// Returns `None` if the search runs off the end of the representable dates.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> Option<NaiveDate> {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date.succ_opt()?;
        }
        Some(new_date)
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDate) -> Option<NaiveDate> {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date.pred_opt()?;
        }
        Some(new_date)
    }

    /// Return a vector of business dates between a start and end, inclusive.
    ///
    /// Unlike a strict business day range, `start` and `end` may themselves be non-business days.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        self.cal_date_range(start, end)
            .into_iter()
            .filter(|d| self.is_bus_day(d))
            .collect()
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    ///
    /// If `start` is after `end` the vector is empty.
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        date_range(start, end)
    }
}
