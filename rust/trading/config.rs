use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::json::JSON;
use crate::trading::builder::DEFAULT_EXCHANGE;

/// Settings for building a trading calendar.
///
/// Every key is optional when read from JSON:
///
/// ```json
/// {"exchange": "NYSE", "start": "2022-04-01", "end": "2022-04-30"}
/// ```
///
/// An omitted `start` or `end` is defaulted against today when the calendar is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub exchange: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            exchange: DEFAULT_EXCHANGE.to_string(),
            start: None,
            end: None,
        }
    }
}

impl CalendarConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }
}

impl JSON for CalendarConfig {}
