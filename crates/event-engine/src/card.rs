//! View models for the event grid.
//!
//! The page shows every active event as a card. Exactly one card, the
//! [`next_highlight_event`], carries the "Register Now" action; every other
//! card reads "Coming Soon".

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::display::display_date;
use crate::event::Event;
use crate::schedule::{next_highlight_event, sort_events_by_date};
use crate::status::{event_status, EventStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallToAction {
    #[serde(rename = "Register Now")]
    RegisterNow,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl fmt::Display for CallToAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RegisterNow => "Register Now",
            Self::ComingSoon => "Coming Soon",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard<'a> {
    pub title: &'a str,
    pub display_date: String,
    /// True when `display_date` is the raw configuration text.
    pub date_is_fallback: bool,
    pub time: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub register_link: &'a str,
    pub status: EventStatus,
    pub highlight: bool,
    pub call_to_action: CallToAction,
}

/// Cards for every active event, in [`sort_events_by_date`] order.
pub fn build_event_cards(events: &[Event], now: NaiveDateTime) -> Vec<EventCard<'_>> {
    let highlighted = next_highlight_event(events, now);

    sort_events_by_date(events, now)
        .into_iter()
        .map(|event| {
            let highlight = highlighted.is_some_and(|h| std::ptr::eq(h, event));
            let label = display_date(event, now);
            EventCard {
                title: &event.title,
                date_is_fallback: label.is_fallback(),
                display_date: label.into_string(),
                time: &event.time,
                location: &event.location,
                description: &event.description,
                tags: &event.tags,
                register_link: &event.register_link,
                status: event_status(event, now),
                highlight,
                call_to_action: if highlight {
                    CallToAction::RegisterNow
                } else {
                    CallToAction::ComingSoon
                },
            }
        })
        .collect()
}
