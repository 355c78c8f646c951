//! Tests for weekly next-occurrence calculation.
//!
//! Casual Coding runs Tuesdays 7:00 PM - 8:00 PM starting 2025-08-26 (a Tuesday).

use chrono::{NaiveDate, NaiveDateTime};
use event_engine::{next_occurrence, Event};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn casual_coding() -> Event {
    Event::weekly("Casual Coding", 2, "2025-08-26", "7:00 PM - 8:00 PM")
}

// ── Non-recurring and incomplete series ─────────────────────────────────────

#[test]
fn one_off_event_has_no_occurrence() {
    let event = Event::one_off("Workshop", "2025-09-02", "12:00 PM - 1:00 PM");
    assert_eq!(next_occurrence(&event, at("2025-09-01T10:00:00")), None);
}

#[test]
fn series_without_weekday_has_no_occurrence() {
    let event = Event {
        day_of_week: None,
        ..casual_coding()
    };
    assert_eq!(next_occurrence(&event, at("2025-09-03T10:00:00")), None);
}

#[test]
fn series_without_start_date_has_no_occurrence() {
    let event = Event {
        start_date: None,
        ..casual_coding()
    };
    assert_eq!(next_occurrence(&event, at("2025-09-03T10:00:00")), None);
}

#[test]
fn series_with_unreadable_start_date_has_no_occurrence() {
    let event = Event {
        start_date: Some("late August".to_string()),
        ..casual_coding()
    };
    assert_eq!(next_occurrence(&event, at("2025-09-03T10:00:00")), None);
}

#[test]
fn out_of_range_weekday_has_no_occurrence() {
    let event = Event::weekly("Broken", 9, "2025-08-26", "7:00 PM - 8:00 PM");
    assert_eq!(next_occurrence(&event, at("2025-09-03T10:00:00")), None);
}

// ── Series not yet started ──────────────────────────────────────────────────

#[test]
fn future_start_date_is_first_occurrence() {
    // Start date is a Tuesday two weeks out; the weekday math is skipped.
    let now = at("2025-08-13T09:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 8, 26)));
}

#[test]
fn future_start_date_is_returned_even_off_weekday() {
    // The start date wins even when it is not the series weekday.
    let event = Event::weekly("Kickoff", 2, "2025-09-04", "7:00 PM - 8:00 PM");
    assert_eq!(
        next_occurrence(&event, at("2025-09-01T09:00:00")),
        Some(day(2025, 9, 4))
    );
}

#[test]
fn start_date_today_falls_through_to_weekday_math() {
    // Midnight on the start date is not after 10:00, so the series is running.
    let now = at("2025-08-26T10:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 8, 26)));
}

// ── Weekday arithmetic ──────────────────────────────────────────────────────

#[test]
fn wednesday_rolls_to_following_tuesday() {
    let now = at("2025-09-03T12:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 9)));
}

#[test]
fn monday_rolls_to_next_day() {
    let now = at("2025-09-01T23:59:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 2)));
}

#[test]
fn saturday_wraps_past_week_boundary() {
    let now = at("2025-09-13T08:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 16)));
}

#[test]
fn sunday_series_is_supported() {
    let event = Event::weekly("Sunday Study Hall", 0, "2025-08-31", "2:00 PM - 4:00 PM");
    let now = at("2025-09-03T12:00:00");
    assert_eq!(next_occurrence(&event, now), Some(day(2025, 9, 7)));
}

#[test]
fn crosses_year_boundary() {
    // Wednesday 2025-12-31 → Tuesday 2026-01-06.
    let now = at("2025-12-31T12:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2026, 1, 6)));
}

// ── Same weekday: start time decides ────────────────────────────────────────

#[test]
fn matching_weekday_before_start_time_is_today() {
    let now = at("2025-09-02T18:59:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 2)));
}

#[test]
fn matching_weekday_at_start_time_moves_a_week() {
    let now = at("2025-09-02T19:00:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 9)));
}

#[test]
fn matching_weekday_after_start_time_moves_a_week() {
    let now = at("2025-09-02T21:30:00");
    assert_eq!(next_occurrence(&casual_coding(), now), Some(day(2025, 9, 9)));
}

#[test]
fn noon_start_is_not_read_as_midnight() {
    let event = Event::weekly("Lunch & Learn", 2, "2025-08-26", "12:00 PM - 1:00 PM");
    assert_eq!(
        next_occurrence(&event, at("2025-09-02T11:00:00")),
        Some(day(2025, 9, 2))
    );
    assert_eq!(
        next_occurrence(&event, at("2025-09-02T12:30:00")),
        Some(day(2025, 9, 9))
    );
}

#[test]
fn unreadable_start_time_counts_as_begun() {
    let event = Event::weekly("Open Lab", 2, "2025-08-26", "All evening");
    assert_eq!(
        next_occurrence(&event, at("2025-09-02T08:00:00")),
        Some(day(2025, 9, 9))
    );
}

#[test]
fn recurrence_pattern_text_is_not_consulted() {
    let event = Event {
        recurrence_pattern: Some("monthly".to_string()),
        ..casual_coding()
    };
    assert_eq!(
        next_occurrence(&event, at("2025-09-03T12:00:00")),
        Some(day(2025, 9, 9))
    );
}

#[test]
fn absurd_start_hour_counts_as_begun() {
    let event = Event::weekly("Typo Night", 2, "2025-08-26", "4294967290:00 PM - late");
    assert_eq!(
        next_occurrence(&event, at("2025-09-02T10:00:00")),
        Some(day(2025, 9, 9))
    );
}
