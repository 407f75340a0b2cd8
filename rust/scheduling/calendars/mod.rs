mod cal;
mod dateroll;
pub mod named;

pub use crate::scheduling::calendars::{
    cal::Cal,
    dateroll::DateRoll,
    named::{canonical_name, SessionHours},
};
