//! # event-engine
//!
//! Date labels, status badges and ordering for a club's event listing.
//!
//! Events come from static configuration and are either one-off (a calendar
//! date) or weekly series (a weekday plus a start date). Every time-sensitive
//! function takes the current local wall-clock time as an explicit `now`, so
//! results are deterministic and nothing here reads the system clock.
//!
//! ## Modules
//!
//! - [`event`] — the `Event` record and JSON loading
//! - [`date`] — `YYYY-MM-DD` → local calendar date
//! - [`clock`] — start time out of `"7:00 PM - 8:00 PM"` text
//! - [`occurrence`] — next date of a weekly series
//! - [`display`] — `"Next: Tuesday, September 9, 2025"` style labels
//! - [`status`] — today / upcoming / past / recurring
//! - [`schedule`] — sorting, highlight selection, upcoming and tag filters
//! - [`card`] — per-event view models for the event grid
//! - [`error`] — Error types

pub mod card;
pub mod clock;
pub mod date;
pub mod display;
pub mod error;
pub mod event;
pub mod occurrence;
pub mod schedule;
pub mod status;

pub use card::{build_event_cards, CallToAction, EventCard};
pub use date::{parse_local_date, LocalDate};
pub use display::{display_date, DisplayDate};
pub use error::EngineError;
pub use event::{load_events, Event};
pub use occurrence::next_occurrence;
pub use schedule::{
    filter_events_by_tag, next_highlight_event, sort_events_by_date, upcoming_events,
    DEFAULT_UPCOMING_COUNT,
};
pub use status::{event_status, has_event_passed, is_event_this_week, is_event_today, EventStatus};
