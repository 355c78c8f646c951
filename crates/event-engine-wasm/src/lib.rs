//! WASM bindings for event-engine.
//!
//! Exposes ordering, highlight selection, date labels and status to the page
//! renderer via `wasm-bindgen`. Events cross the boundary as the same JSON
//! array the site keeps in its static configuration, and results come back as
//! JSON strings. `now` is always passed in by the caller as a local wall-clock
//! ISO string so rendering stays deterministic.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p event-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/event-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/event_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use event_engine::{Event, EventStatus};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventSummaryDto<'a> {
    title: &'a str,
    next_occurrence: Option<String>,
    display_date: String,
    status: EventStatus,
    today: bool,
    passed: bool,
    this_week: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a local wall-clock ISO string. A bare date means midnight.
fn parse_now(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| JsValue::from_str(&format!("Invalid now '{}': {}", s, e)))
}

fn parse_events(json: &str) -> Result<Vec<Event>, JsValue> {
    event_engine::load_events(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_event(json: &str) -> Result<Event, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Active events in display order: one-off by date, then weekly series by
/// next occurrence. Returns a JSON array of events.
#[wasm_bindgen(js_name = "sortEvents")]
pub fn sort_events(events_json: &str, now: &str) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let now = parse_now(now)?;
    to_json(&event_engine::sort_events_by_date(&events, now))
}

/// The event that gets the "Register Now" action, or `null`.
#[wasm_bindgen(js_name = "nextHighlightEvent")]
pub fn next_highlight_event(events_json: &str, now: &str) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let now = parse_now(now)?;
    to_json(&event_engine::next_highlight_event(&events, now))
}

/// The first `count` events of the sorted listing (5 when omitted).
#[wasm_bindgen(js_name = "upcomingEvents")]
pub fn upcoming_events(
    events_json: &str,
    now: &str,
    count: Option<u32>,
) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let now = parse_now(now)?;
    let count = count.map_or(event_engine::DEFAULT_UPCOMING_COUNT, |c| c as usize);
    to_json(&event_engine::upcoming_events(&events, count, now))
}

/// Active events with a tag containing `tag`, case-insensitively.
#[wasm_bindgen(js_name = "filterEventsByTag")]
pub fn filter_events_by_tag(events_json: &str, tag: &str) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    to_json(&event_engine::filter_events_by_tag(&events, tag))
}

/// Card view models for the event grid.
#[wasm_bindgen(js_name = "eventCards")]
pub fn event_cards(events_json: &str, now: &str) -> Result<String, JsValue> {
    let events = parse_events(events_json)?;
    let now = parse_now(now)?;
    to_json(&event_engine::build_event_cards(&events, now))
}

/// Next date (`YYYY-MM-DD`) of a weekly series, or `null`.
#[wasm_bindgen(js_name = "nextOccurrence")]
pub fn next_occurrence(event_json: &str, now: &str) -> Result<Option<String>, JsValue> {
    let event = parse_event(event_json)?;
    let now = parse_now(now)?;
    Ok(event_engine::next_occurrence(&event, now).map(|d| d.format("%Y-%m-%d").to_string()))
}

/// Date label for one event.
#[wasm_bindgen(js_name = "displayDate")]
pub fn display_date(event_json: &str, now: &str) -> Result<String, JsValue> {
    let event = parse_event(event_json)?;
    let now = parse_now(now)?;
    Ok(event_engine::display_date(&event, now).into_string())
}

/// Status, label and date flags for one event as a JSON object.
#[wasm_bindgen(js_name = "eventStatus")]
pub fn event_status(event_json: &str, now: &str) -> Result<String, JsValue> {
    let event = parse_event(event_json)?;
    let now = parse_now(now)?;
    to_json(&EventSummaryDto {
        title: &event.title,
        next_occurrence: event_engine::next_occurrence(&event, now)
            .map(|d| d.format("%Y-%m-%d").to_string()),
        display_date: event_engine::display_date(&event, now).into_string(),
        status: event_engine::event_status(&event, now),
        today: event_engine::is_event_today(&event, now),
        passed: event_engine::has_event_passed(&event, now),
        this_week: event_engine::is_event_this_week(&event, now),
    })
}
