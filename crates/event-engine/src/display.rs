//! Human-readable date labels.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::date::LocalDate;
use crate::event::Event;
use crate::occurrence::next_occurrence;

/// US long date style, e.g. `Tuesday, September 2, 2025`.
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// A date label, tagged with whether it came from a real date or is the raw
/// configuration text shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDate {
    Formatted(String),
    Fallback(String),
}

impl DisplayDate {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Formatted(label) | Self::Fallback(label) => label,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(label) | Self::Fallback(label) => label,
        }
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Label for an event's date.
///
/// Recurring events read `Next: <long date>` from [`next_occurrence`]; one-off
/// events show their own date in long form. Whenever no date can be computed
/// the raw `date` text is returned as a [`DisplayDate::Fallback`].
pub fn display_date(event: &Event, now: NaiveDateTime) -> DisplayDate {
    if event.is_recurring {
        return match next_occurrence(event, now) {
            Some(next) => DisplayDate::Formatted(format!("Next: {}", format_long_date(next))),
            None => DisplayDate::Fallback(event.date.clone()),
        };
    }

    match LocalDate::parse(&event.date) {
        LocalDate::Parsed(date) => DisplayDate::Formatted(format_long_date(date)),
        LocalDate::Unparsed(raw) => {
            debug!(title = %event.title, date = %raw, "showing raw date text");
            DisplayDate::Fallback(raw)
        }
    }
}
