use chrono::prelude::*;
use log::debug;

use crate::errors::Result;
use crate::scheduling::{build_standard_calendar, CalendarField, DateRange, StandardCalendar};
use crate::sessions::{ExchangeSessions, SessionProvider, Sessions};
use crate::trading::{adjust_odd_days, flag_options_days, merge_sessions, CalendarConfig, TradingCalendar};

/// The exchange used when none is configured.
pub const DEFAULT_EXCHANGE: &str = "NYSE";

/// Builds trading calendars for one exchange over an owned, updatable [`DateRange`].
///
/// Every build method accepts optional `start` and `end` overrides. A supplied bound replaces
/// the stored one and persists for later calls; an omitted bound keeps the stored value.
/// Calendars are recomputed on every call.
///
/// # Examples
/// ```rust
/// # use tradingcal::trading::TradingCal;
/// # use tradingcal::scheduling::nd;
/// let mut tc = TradingCal::new(Some(nd(2022, 4, 1)), Some(nd(2022, 4, 30))).unwrap();
/// let cal = tc.build_full_calendar(None, None).unwrap();
/// assert_eq!(cal.len(), 30);
/// assert_eq!(cal.trading_days().len(), 20);
///
/// // Narrow the end date; the start date is kept.
/// let cal = tc.build_full_calendar(None, Some(nd(2022, 4, 10))).unwrap();
/// assert_eq!(cal.len(), 10);
/// assert_eq!(tc.set_dates(None, None), (nd(2022, 4, 1), nd(2022, 4, 10)));
/// ```
#[derive(Clone, Debug)]
pub struct TradingCal<P: SessionProvider = ExchangeSessions> {
    range: DateRange,
    provider: P,
}

impl TradingCal<ExchangeSessions> {
    /// Create a calendar builder for the default exchange, defaulting the range against today.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        Ok(Self::with_provider(
            ExchangeSessions::try_from_name(DEFAULT_EXCHANGE)?,
            DateRange::new(start, end),
        ))
    }

    /// Create a calendar builder from a [`CalendarConfig`].
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        Ok(Self::with_provider(
            ExchangeSessions::try_from_name(&config.exchange)?,
            DateRange::new(config.start, config.end),
        ))
    }
}

impl<P: SessionProvider> TradingCal<P> {
    /// Create a calendar builder over any session provider.
    pub fn with_provider(provider: P, range: DateRange) -> Self {
        TradingCal { range, provider }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Update any supplied bound of the stored range and return the effective `(start, end)`.
    pub fn set_dates(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> (NaiveDate, NaiveDate) {
        self.range.resolve(start, end).bounds()
    }

    /// The session of every trading day, including early closes.
    pub fn trading_schedule(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Sessions> {
        let (start, end) = self.set_dates(start, end);
        self.provider.schedule(&start, &end)
    }

    /// The days the market is open.
    pub fn business_days(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<NaiveDate>> {
        let (start, end) = self.set_dates(start, end);
        self.provider.valid_days(&start, &end)
    }

    /// The market open and close of every trading day, keyed by date.
    pub fn build_calendar(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Sessions> {
        self.trading_schedule(start, end)
    }

    /// One row per calendar day with the requested date attributes.
    ///
    /// `fields` defaults to [`CalendarField::DEFAULT`] and must include
    /// [`CalendarField::Date`].
    pub fn build_standard_calendar(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        fields: Option<&[CalendarField]>,
    ) -> Result<StandardCalendar> {
        let (start, end) = self.set_dates(start, end);
        build_standard_calendar(&start, &end, fields)
    }

    /// The merged calendar of every day in the range, with options days flagged and
    /// adjusted for holidays.
    pub fn build_full_calendar(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<TradingCalendar> {
        let standard = self.build_standard_calendar(start, end, None)?;
        let sessions = self.build_calendar(None, None)?;
        let merged = merge_sessions(&standard, &sessions)?;
        let calendar = adjust_odd_days(&flag_options_days(&merged));
        debug!(
            "built {} calendar {}..={}: {} days, {} trading, {} options",
            self.provider.exchange(),
            self.range.start,
            self.range.end,
            calendar.len(),
            sessions.len(),
            calendar.options_only().len()
        );
        Ok(calendar)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalendarError;
    use crate::scheduling::nd;

    fn fixture() -> TradingCal {
        TradingCal::with_provider(
            ExchangeSessions::try_from_name("NYSE").unwrap(),
            DateRange::from_today(nd(2022, 4, 1), None, Some(nd(2022, 4, 30))),
        )
    }

    #[test]
    fn test_set_dates() {
        let mut tc = fixture();
        assert_eq!(tc.set_dates(None, None), (nd(2022, 4, 1), nd(2022, 4, 30)));
        assert_eq!(
            tc.set_dates(Some(nd(2022, 4, 4)), None),
            (nd(2022, 4, 4), nd(2022, 4, 30))
        );
        assert_eq!(tc.range().start, nd(2022, 4, 4));
    }

    #[test]
    fn test_business_days_updates_range() {
        let mut tc = fixture();
        let days = tc.business_days(Some(nd(2022, 4, 11)), Some(nd(2022, 4, 17))).unwrap();
        assert_eq!(days.len(), 4);
        assert_eq!(tc.range().bounds(), (nd(2022, 4, 11), nd(2022, 4, 17)));
    }

    #[test]
    fn test_build_calendar_trading_days_only() {
        let mut tc = fixture();
        let sessions = tc.build_calendar(None, None).unwrap();
        assert_eq!(sessions.len(), 20);
        assert!(!sessions.contains_key(&nd(2022, 4, 15)));
        assert!(!sessions.contains_key(&nd(2022, 4, 16)));
    }

    #[test]
    fn test_build_standard_calendar_fields() {
        let mut tc = fixture();
        let result = tc.build_standard_calendar(None, None, Some(&[CalendarField::Year]));
        assert!(matches!(result, Err(CalendarError::MissingDateField)));
        let cal = tc
            .build_standard_calendar(None, None, Some(&[CalendarField::Date, CalendarField::Year]))
            .unwrap();
        assert_eq!(cal.len(), 30);
    }

    #[test]
    fn test_build_full_calendar_good_friday() {
        let mut tc = fixture();
        let cal = tc.build_full_calendar(None, None).unwrap();
        let friday = cal.get(&nd(2022, 4, 15)).unwrap();
        assert!(friday.market_open.is_none());
        assert!(friday.market_close.is_none());
        assert_eq!(friday.day_of_week, 4);
        assert!(!friday.opt);
        assert!(cal.get(&nd(2022, 4, 14)).unwrap().opt);
    }

    #[test]
    fn test_build_full_calendar_inverted_range_is_empty() {
        let mut tc = fixture();
        let cal = tc.build_full_calendar(Some(nd(2022, 5, 1)), Some(nd(2022, 4, 1))).unwrap();
        assert!(cal.is_empty());
    }

    #[test]
    fn test_from_config_unknown_exchange() {
        let config = CalendarConfig {
            exchange: "LSE".to_string(),
            start: None,
            end: None,
        };
        assert!(matches!(
            TradingCal::from_config(&config),
            Err(CalendarError::UnknownExchange(_))
        ));
    }
}
