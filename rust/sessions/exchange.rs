use chrono::prelude::*;
use log::debug;
use std::collections::HashSet;

use crate::errors::{CalendarError, Result};
use crate::scheduling::named::{get_early_closes_by_name, get_session_hours_by_name};
use crate::scheduling::{canonical_name, Cal, DateRoll, SessionHours};
use crate::sessions::{Session, SessionProvider, Sessions};

/// Session provider for a named exchange, with holidays and early closes generated by rule.
///
/// A fresh [`Cal`] is built for the years touched by each request.
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeSessions {
    name: &'static str,
    exchange: String,
    hours: SessionHours,
}

impl ExchangeSessions {
    /// Bind a provider to a named exchange, e.g. `"NYSE"` or `"XNYS"`.
    ///
    /// # Examples
    /// ```rust
    /// # use tradingcal::sessions::{ExchangeSessions, SessionProvider};
    /// # use tradingcal::scheduling::nd;
    /// let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
    /// let days = nyse.valid_days(&nd(2022, 4, 11), &nd(2022, 4, 17)).unwrap();
    /// assert_eq!(days, vec![nd(2022, 4, 11), nd(2022, 4, 12), nd(2022, 4, 13), nd(2022, 4, 14)]);
    /// ```
    pub fn try_from_name(name: &str) -> Result<Self> {
        let key = canonical_name(name)?;
        Ok(ExchangeSessions {
            name: key,
            exchange: key.to_uppercase(),
            hours: get_session_hours_by_name(key)?,
        })
    }

    /// The business day calendar covering every year touched by `[start, end]`.
    pub fn calendar(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Cal> {
        Cal::try_from_name(self.name, start.year()..=end.year())
    }

    /// The early closing days in `[start, end]`, ascending.
    pub fn early_closes(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        let mut dates = get_early_closes_by_name(self.name, start.year()..=end.year())?;
        dates.retain(|d| start <= d && d <= end);
        Ok(dates)
    }

    fn session(&self, date: &NaiveDate, early: bool) -> Result<Session> {
        let close = if early {
            self.hours.early_close
        } else {
            self.hours.close
        };
        Ok(Session::new(
            self.to_utc(date, self.hours.open)?,
            self.to_utc(date, close)?,
        ))
    }

    fn to_utc(&self, date: &NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>> {
        self.hours
            .timezone
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| CalendarError::InvalidSessionTime {
                date: *date,
                time,
                tz: self.hours.timezone.name().to_string(),
            })
    }
}

impl SessionProvider for ExchangeSessions {
    fn exchange(&self) -> &str {
        &self.exchange
    }

    fn schedule(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Sessions> {
        let cal = self.calendar(start, end)?;
        let early: HashSet<NaiveDate> = self.early_closes(start, end)?.into_iter().collect();
        let mut sessions = Sessions::new();
        for date in cal.bus_date_range(start, end) {
            sessions.insert(date, self.session(&date, early.contains(&date))?);
        }
        debug!(
            "{} schedule {start}..={end}: {} sessions, {} early closes",
            self.exchange,
            sessions.len(),
            early.len()
        );
        Ok(sessions)
    }

    fn valid_days(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        Ok(self.calendar(start, end)?.bus_date_range(start, end))
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_unknown_exchange() {
        let result = ExchangeSessions::try_from_name("LSE");
        assert!(matches!(result, Err(CalendarError::UnknownExchange(_))));
    }

    #[test]
    fn test_exchange_name() {
        let nyse = ExchangeSessions::try_from_name("xnys").unwrap();
        assert_eq!(nyse.exchange(), "NYSE");
    }

    #[test]
    fn test_valid_days_april_2022() {
        let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
        let days = nyse.valid_days(&nd(2022, 4, 1), &nd(2022, 4, 30)).unwrap();
        assert_eq!(days.len(), 20);
        assert!(!days.contains(&nd(2022, 4, 15)));
        assert_eq!(days.first(), Some(&nd(2022, 4, 1)));
        assert_eq!(days.last(), Some(&nd(2022, 4, 29)));
    }

    #[test]
    fn test_schedule_daylight_saving() {
        let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
        let sessions = nyse.schedule(&nd(2022, 1, 3), &nd(2022, 4, 14)).unwrap();
        let winter = sessions.get(&nd(2022, 1, 3)).unwrap();
        assert_eq!(winter.market_open, utc(2022, 1, 3, 14, 30));
        assert_eq!(winter.market_close, utc(2022, 1, 3, 21, 0));
        let summer = sessions.get(&nd(2022, 4, 14)).unwrap();
        assert_eq!(summer.market_open, utc(2022, 4, 14, 13, 30));
        assert_eq!(summer.market_close, utc(2022, 4, 14, 20, 0));
    }

    #[test]
    fn test_schedule_early_close() {
        let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
        let sessions = nyse.schedule(&nd(2022, 11, 21), &nd(2022, 11, 27)).unwrap();
        let keys: Vec<NaiveDate> = sessions.keys().copied().collect();
        assert_eq!(keys, vec![nd(2022, 11, 21), nd(2022, 11, 22), nd(2022, 11, 23), nd(2022, 11, 25)]);
        let friday = sessions.get(&nd(2022, 11, 25)).unwrap();
        assert_eq!(friday.market_close, utc(2022, 11, 25, 18, 0));
        assert_eq!(friday.duration(), chrono::Duration::minutes(210));
    }

    #[test]
    fn test_schedule_spans_years() {
        let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
        let days = nyse.valid_days(&nd(2022, 12, 23), &nd(2023, 1, 3)).unwrap();
        assert_eq!(
            days,
            vec![nd(2022, 12, 23), nd(2022, 12, 27), nd(2022, 12, 28), nd(2022, 12, 29), nd(2022, 12, 30), nd(2023, 1, 3)]
        );
    }

    #[test]
    fn test_schedule_matches_valid_days() {
        let nyse = ExchangeSessions::try_from_name("NYSE").unwrap();
        let (start, end) = (nd(2024, 6, 1), nd(2024, 7, 31));
        let sessions = nyse.schedule(&start, &end).unwrap();
        let days = nyse.valid_days(&start, &end).unwrap();
        assert_eq!(sessions.keys().copied().collect::<Vec<_>>(), days);
        assert_eq!(
            sessions.get(&nd(2024, 7, 3)).unwrap().market_close,
            utc(2024, 7, 3, 17, 0)
        );
    }
}
