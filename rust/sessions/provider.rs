use chrono::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The regular trading session of one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub market_open: DateTime<Utc>,
    pub market_close: DateTime<Utc>,
}

impl Session {
    pub fn new(market_open: DateTime<Utc>, market_close: DateTime<Utc>) -> Self {
        Session {
            market_open,
            market_close,
        }
    }

    /// Length of the session.
    pub fn duration(&self) -> chrono::Duration {
        self.market_close - self.market_open
    }
}

/// Sessions keyed by trading date, ascending.
pub type Sessions = IndexMap<NaiveDate, Session>;

/// A source of exchange trading sessions.
pub trait SessionProvider {
    /// The identifier of the exchange the provider is bound to.
    fn exchange(&self) -> &str;

    /// Return the session of every valid trading day in `[start, end]`, ascending.
    fn schedule(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Sessions>;

    /// Return every valid trading day in `[start, end]`, ascending.
    fn valid_days(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        Ok(self.schedule(start, end)?.keys().copied().collect())
    }
}
