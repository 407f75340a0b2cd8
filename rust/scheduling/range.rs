use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};

/// Number of calendar days between the default `start` and the default `end`.
pub const DEFAULT_HORIZON_DAYS: u64 = 365;

/// An inclusive `start`/`end` date pair with keep-previous-if-not-supplied updates.
///
/// The defaults are taken from the date of construction: `start` is today and `end` is
/// today plus [`DEFAULT_HORIZON_DAYS`], even when a `start` far in the past is supplied.
///
/// No check is made that `start <= end`. An inverted range produces an empty calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range defaulting against the local clock.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self::from_today(Local::now().date_naive(), start, end)
    }

    /// Create a range defaulting against an explicit `today`.
    ///
    /// # Examples
    /// ```rust
    /// # use tradingcal::scheduling::{nd, DateRange};
    /// let range = DateRange::from_today(nd(2024, 1, 10), Some(nd(2020, 1, 1)), None);
    /// assert_eq!(range.start, nd(2020, 1, 1));
    /// assert_eq!(range.end, nd(2025, 1, 9));
    /// ```
    pub fn from_today(today: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let default_end = today
            .checked_add_days(Days::new(DEFAULT_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);
        DateRange {
            start: start.unwrap_or(today),
            end: end.unwrap_or(default_end),
        }
    }

    /// Overwrite any supplied bound and return the effective range.
    pub fn resolve(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
        if let Some(s) = start {
            self.start = s;
        }
        if let Some(e) = end {
            self.end = e;
        }
        *self
    }

    /// Return the range as a `(start, end)` tuple.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    #[test]
    fn test_defaults() {
        let range = DateRange::from_today(nd(2022, 3, 1), None, None);
        assert_eq!(range.bounds(), (nd(2022, 3, 1), nd(2023, 3, 1)));
    }

    #[test]
    fn test_default_end_ignores_start() {
        let range = DateRange::from_today(nd(2022, 3, 1), Some(nd(2010, 6, 1)), None);
        assert_eq!(range.bounds(), (nd(2010, 6, 1), nd(2023, 3, 1)));
    }

    #[test]
    fn test_resolve_keeps_previous() {
        let mut range = DateRange::from_today(nd(2022, 3, 1), None, None);
        assert_eq!(range.resolve(None, None).bounds(), (nd(2022, 3, 1), nd(2023, 3, 1)));

        let r = range.resolve(Some(nd(2022, 4, 1)), None);
        assert_eq!(r.bounds(), (nd(2022, 4, 1), nd(2023, 3, 1)));

        let r = range.resolve(None, Some(nd(2022, 4, 30)));
        assert_eq!(r.bounds(), (nd(2022, 4, 1), nd(2022, 4, 30)));
        assert_eq!(range, r);
    }

    #[test]
    fn test_resolve_accepts_inverted() {
        let mut range = DateRange::from_today(nd(2022, 3, 1), None, None);
        let r = range.resolve(Some(nd(2022, 5, 1)), Some(nd(2022, 4, 1)));
        assert_eq!(r.bounds(), (nd(2022, 5, 1), nd(2022, 4, 1)));
        assert!(r.start > r.end);
    }
}
