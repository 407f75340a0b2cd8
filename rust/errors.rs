//! Error types for calendar construction.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::scheduling::CalendarField;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors that can occur while building trading calendars.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A standard calendar field name is not one of the supported [`CalendarField`] values.
    #[error("Unsupported calendar field: '{0}'")]
    UnsupportedField(String),

    /// The requested standard calendar fields do not include `date`.
    #[error("Standard calendar fields must include 'date'")]
    MissingDateField,

    /// A standard calendar row is missing a field required by the merged calendar.
    #[error("Standard calendar row for {date} has no usable '{field}' value")]
    MissingField { date: NaiveDate, field: CalendarField },

    /// The exchange name is not one of the available named exchanges.
    #[error("'{0}' is not found in list of existing exchanges.")]
    UnknownExchange(String),

    /// A session time does not map to a single instant in the exchange timezone.
    #[error("Session time {time} on {date} is not a valid local time in {tz}")]
    InvalidSessionTime {
        date: NaiveDate,
        time: NaiveTime,
        tz: String,
    },

    /// Configuration could not be read.
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or calendar JSON could not be parsed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
