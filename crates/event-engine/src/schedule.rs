//! Ordering and selection over a full event listing.
//!
//! All functions borrow from the caller's slice and skip events marked
//! inactive. One-off events always precede weekly series: a dated event is
//! the more urgent thing to act on.

use chrono::{NaiveDate, NaiveDateTime};

use crate::date::LocalDate;
use crate::event::Event;
use crate::occurrence::next_occurrence;

/// Number of events [`upcoming_events`] callers show by default.
pub const DEFAULT_UPCOMING_COUNT: usize = 5;

/// Sort key that places missing dates after every real one.
fn dated_last(date: Option<NaiveDate>) -> (bool, Option<NaiveDate>) {
    (date.is_none(), date)
}

fn sorted_one_off(events: &[Event]) -> Vec<&Event> {
    let mut one_off: Vec<&Event> = events
        .iter()
        .filter(|e| e.is_active() && !e.is_recurring)
        .collect();
    one_off.sort_by_cached_key(|e| dated_last(LocalDate::parse(&e.date).date()));
    one_off
}

/// Active events in display order.
///
/// One-off events come first in date order, then weekly series by next
/// occurrence. A series with no computable occurrence sorts after every
/// series that has one. Ties keep their input order.
pub fn sort_events_by_date(events: &[Event], now: NaiveDateTime) -> Vec<&Event> {
    let mut recurring: Vec<&Event> = events
        .iter()
        .filter(|e| e.is_active() && e.is_recurring)
        .collect();
    recurring.sort_by_cached_key(|e| dated_last(next_occurrence(e, now)));

    let mut ordered = sorted_one_off(events);
    ordered.extend(recurring);
    ordered
}

/// The soonest active one-off event dated today or later.
///
/// This is the single event that gets the registration call to action. Weekly
/// series are never chosen, and neither are events whose date cannot be read.
pub fn next_highlight_event(events: &[Event], now: NaiveDateTime) -> Option<&Event> {
    let today = now.date();
    sorted_one_off(events).into_iter().find(|e| {
        LocalDate::parse(&e.date)
            .date()
            .is_some_and(|date| date >= today)
    })
}

/// The first `count` events of [`sort_events_by_date`].
pub fn upcoming_events(events: &[Event], count: usize, now: NaiveDateTime) -> Vec<&Event> {
    let mut sorted = sort_events_by_date(events, now);
    sorted.truncate(count);
    sorted
}

/// Active events with a tag containing `tag`, compared case-insensitively.
pub fn filter_events_by_tag<'a>(events: &'a [Event], tag: &str) -> Vec<&'a Event> {
    let needle = tag.to_lowercase();
    events
        .iter()
        .filter(|e| e.is_active() && e.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
        .collect()
}
