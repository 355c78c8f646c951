//! Calendar-date parsing without a UTC detour.
//!
//! A bare `YYYY-MM-DD` is a local calendar day, not an instant. Parsing it
//! straight into a `NaiveDate` keeps it that way, so no host offset can roll
//! "2025-09-02" back to September 1.

use chrono::NaiveDate;

use crate::error::{EngineError, Result};

/// Parse a `YYYY-MM-DD` string into a local calendar date.
///
/// The string is split on `-` into year, month (1-based, as written) and day.
/// Anything other than three ASCII-digit fields naming a real day is rejected
/// with [`EngineError::InvalidDate`]; out-of-range days are not rolled over
/// into the next month.
pub fn parse_local_date(date: &str) -> Result<NaiveDate> {
    let invalid = || EngineError::InvalidDate(date.to_string());

    let fields: Vec<&str> = date.trim().split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(invalid());
    };
    if [year, month, day]
        .iter()
        .any(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// A date field that either parsed or is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalDate {
    Parsed(NaiveDate),
    Unparsed(String),
}

impl LocalDate {
    pub fn parse(date: &str) -> Self {
        match parse_local_date(date) {
            Ok(parsed) => Self::Parsed(parsed),
            Err(_) => Self::Unparsed(date.to_string()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(date) => Some(*date),
            Self::Unparsed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_calendar_fields_exactly() {
        let date = parse_local_date("2025-09-02").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 9, 2));
    }

    #[test]
    fn accepts_unpadded_fields() {
        assert_eq!(
            parse_local_date("2025-9-2").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()
        );
    }

    #[test]
    fn rejects_decorative_text() {
        assert!(parse_local_date("Every Tuesday").is_err());
        assert!(parse_local_date("").is_err());
        assert!(parse_local_date("2025-09").is_err());
        assert!(parse_local_date("2025-09-02-01").is_err());
        assert!(parse_local_date("2025-+9-02").is_err());
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(parse_local_date("2025-02-30").is_err());
        assert!(parse_local_date("2025-13-01").is_err());
        assert!(parse_local_date("2025-00-10").is_err());
    }

    #[test]
    fn error_names_the_input() {
        let err = parse_local_date("soon").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date 'soon': expected YYYY-MM-DD");
    }

    #[test]
    fn local_date_keeps_raw_text() {
        assert_eq!(
            LocalDate::parse("Every Tuesday"),
            LocalDate::Unparsed("Every Tuesday".to_string())
        );
        assert_eq!(LocalDate::parse("Every Tuesday").date(), None);
        assert_eq!(
            LocalDate::parse("2025-09-23").date(),
            NaiveDate::from_ymd_opt(2025, 9, 23)
        );
    }
}
