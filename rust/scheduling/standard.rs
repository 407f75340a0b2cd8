use chrono::prelude::*;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalendarError, Result};
use crate::scheduling::{date_range, CalendarField, FieldValue};

/// The attributes of one calendar day, excluding the `date` key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardRow {
    pub values: IndexMap<CalendarField, FieldValue>,
}

impl StandardRow {
    pub fn get(&self, field: &CalendarField) -> Option<&FieldValue> {
        self.values.get(field)
    }
}

/// One row per calendar day, trading or not, keyed by date in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardCalendar {
    /// The requested columns, excluding `date`.
    pub fields: Vec<CalendarField>,
    pub rows: IndexMap<NaiveDate, StandardRow>,
}

impl StandardCalendar {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&StandardRow> {
        self.rows.get(date)
    }
}

/// Build a standard calendar with one row for every date in `[start, end]`.
///
/// `fields` defaults to [`CalendarField::DEFAULT`]. It must contain [`CalendarField::Date`],
/// which becomes the row key. Repeated fields are kept once.
///
/// # Examples
/// ```rust
/// # use tradingcal::scheduling::{nd, build_standard_calendar, CalendarField, FieldValue};
/// let cal = build_standard_calendar(&nd(2022, 4, 1), &nd(2022, 4, 30), None).unwrap();
/// assert_eq!(cal.len(), 30);
/// let row = cal.get(&nd(2022, 4, 15)).unwrap();
/// assert_eq!(row.get(&CalendarField::DayName), Some(&FieldValue::Text("Friday".to_string())));
/// ```
pub fn build_standard_calendar(
    start: &NaiveDate,
    end: &NaiveDate,
    fields: Option<&[CalendarField]>,
) -> Result<StandardCalendar> {
    let fields = fields.unwrap_or(&CalendarField::DEFAULT);
    if !fields.contains(&CalendarField::Date) {
        return Err(CalendarError::MissingDateField);
    }
    let mut columns: Vec<CalendarField> = Vec::new();
    for field in fields.iter().filter(|f| **f != CalendarField::Date) {
        if !columns.contains(field) {
            columns.push(*field);
        }
    }

    let rows: IndexMap<NaiveDate, StandardRow> = date_range(start, end)
        .into_iter()
        .map(|date| {
            let values = columns.iter().map(|f| (*f, f.value(&date))).collect();
            (date, StandardRow { values })
        })
        .collect();
    debug!(
        "built standard calendar {start}..={end} with {} rows and columns {:?}",
        rows.len(),
        columns
    );
    Ok(StandardCalendar {
        fields: columns,
        rows,
    })
}
