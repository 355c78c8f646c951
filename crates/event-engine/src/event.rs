//! The event record as it appears in the site's static configuration data.
//!
//! Field names are camelCase on the wire so the same JSON that feeds the page
//! renderer can be loaded here unchanged. Records are read-only inputs: no
//! function in this crate mutates an [`Event`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// A club event, either a one-off on a calendar date or a weekly series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Display title, unique within one listing.
    pub title: String,
    /// `YYYY-MM-DD` for one-off events. Decorative text (e.g. "Every Tuesday")
    /// for recurring ones.
    #[serde(default)]
    pub date: String,
    /// Free text such as `"7:00 PM - 8:00 PM"`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub register_link: String,
    #[serde(default)]
    pub is_recurring: bool,
    /// Reserved tag; only weekly recurrence is computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<String>,
    /// 0 = Sunday .. 6 = Saturday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i32>,
    /// First date (`YYYY-MM-DD`) on which a recurring series runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Missing means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Event {
    /// A one-off event on `date` (`YYYY-MM-DD`).
    pub fn one_off(title: &str, date: &str, time: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            ..Self::default()
        }
    }

    /// A weekly series on `day_of_week` (0 = Sunday) starting at `start_date`.
    pub fn weekly(title: &str, day_of_week: i32, start_date: &str, time: &str) -> Self {
        Self {
            title: title.to_string(),
            time: time.to_string(),
            is_recurring: true,
            recurrence_pattern: Some("weekly".to_string()),
            day_of_week: Some(day_of_week),
            start_date: Some(start_date.to_string()),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }

    /// The series weekday, or `None` when `day_of_week` is absent or outside 0..=6.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.day_of_week? {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        }
    }
}

/// Parse a JSON array of events.
pub fn load_events(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    debug!(count = events.len(), "loaded events");
    Ok(events)
}
