use crate::json::JSON;
use crate::trading::TradingCalendar;

impl JSON for TradingCalendar {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;
    use crate::trading::TradingCal;
    use crate::scheduling::DateRange;
    use crate::sessions::ExchangeSessions;

    #[test]
    fn test_trading_calendar_json() {
        let mut tc = TradingCal::with_provider(
            ExchangeSessions::try_from_name("NYSE").unwrap(),
            DateRange::from_today(nd(2022, 4, 13), None, Some(nd(2022, 4, 15))),
        );
        let cal = tc.build_full_calendar(None, None).unwrap();
        let js = cal.to_json().unwrap();
        assert!(js.starts_with(r#"{"2022-04-13":{"day_of_week":2,"day_name":"Wednesday","day_of_year":103,"market_open":"2022-04-13T13:30:00Z""#));
        assert!(js.contains(r#""2022-04-15":{"day_of_week":4,"day_name":"Friday","day_of_year":105,"market_open":null,"market_close":null,"opt":false}"#));
        assert_eq!(TradingCalendar::from_json(&js).unwrap(), cal);
    }
}
