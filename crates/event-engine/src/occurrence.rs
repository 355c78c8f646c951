//! Next-occurrence calculation for weekly series.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

use crate::clock::parse_start_time;
use crate::date::parse_local_date;
use crate::event::Event;

/// The next date a weekly series runs, relative to the local wall-clock `now`.
///
/// Returns `None` for one-off events and for series missing a valid
/// `day_of_week` or `start_date`. A series that has not started yet returns its
/// start date. On the matching weekday, today is returned only while the
/// event's start time is still ahead of `now`; otherwise the series moves to
/// the same weekday next week. A start time that cannot be read counts as
/// already begun.
pub fn next_occurrence(event: &Event, now: NaiveDateTime) -> Option<NaiveDate> {
    if !event.is_recurring {
        return None;
    }
    let Some(weekday) = event.weekday() else {
        trace!(title = %event.title, day_of_week = ?event.day_of_week, "series has no usable weekday");
        return None;
    };
    let start_date = match event.start_date.as_deref().map(parse_local_date) {
        Some(Ok(date)) => date,
        Some(Err(err)) => {
            debug!(title = %event.title, error = %err, "series start date unreadable");
            return None;
        }
        None => {
            trace!(title = %event.title, "series has no start date");
            return None;
        }
    };

    if start_date.and_time(NaiveTime::MIN) > now {
        return Some(start_date);
    }

    let today = now.date();
    let days_until_next =
        (weekday.num_days_from_sunday() + 7 - today.weekday().num_days_from_sunday()) % 7;

    if days_until_next == 0 {
        let starts_later_today = match parse_start_time(&event.time) {
            Some(start) => today.and_time(start) > now,
            None => {
                debug!(title = %event.title, time = %event.time, "start time unreadable");
                false
            }
        };
        if starts_later_today {
            return Some(today);
        }
        return today.checked_add_days(Days::new(7));
    }

    today.checked_add_days(Days::new(u64::from(days_until_next)))
}
