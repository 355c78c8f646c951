//! Today / upcoming / past / recurring classification.

use std::fmt;

use chrono::{Datelike, Days, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::date::LocalDate;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Today,
    Upcoming,
    Past,
    Recurring,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
            Self::Recurring => "recurring",
        })
    }
}

/// Recurring: today's weekday is the series weekday. One-off: the event's
/// calendar day is today. Time of day is ignored.
pub fn is_event_today(event: &Event, now: NaiveDateTime) -> bool {
    if event.is_recurring {
        return event.weekday() == Some(now.weekday());
    }
    LocalDate::parse(&event.date).date() == Some(now.date())
}

/// A one-off event whose day is before today. Recurring events never pass.
pub fn has_event_passed(event: &Event, now: NaiveDateTime) -> bool {
    if event.is_recurring {
        return false;
    }
    LocalDate::parse(&event.date)
        .date()
        .is_some_and(|date| date < now.date())
}

pub fn event_status(event: &Event, now: NaiveDateTime) -> EventStatus {
    if event.is_recurring {
        return if is_event_today(event, now) {
            EventStatus::Today
        } else {
            EventStatus::Recurring
        };
    }

    if has_event_passed(event, now) {
        EventStatus::Past
    } else if is_event_today(event, now) {
        EventStatus::Today
    } else {
        EventStatus::Upcoming
    }
}

/// Whether the event falls in the Sunday-to-Saturday week containing `now`.
/// Recurring events always do.
pub fn is_event_this_week(event: &Event, now: NaiveDateTime) -> bool {
    if event.is_recurring {
        return true;
    }
    let today = now.date();
    let Some(start_of_week) =
        today.checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_sunday())))
    else {
        return false;
    };
    let Some(end_of_week) = start_of_week.checked_add_days(Days::new(6)) else {
        return false;
    };

    LocalDate::parse(&event.date)
        .date()
        .is_some_and(|date| start_of_week <= date && date <= end_of_week)
}
