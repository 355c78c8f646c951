//! Start-time extraction from the free-text `time` field.

use chrono::NaiveTime;

/// Parse the start of a range like `"7:00 PM - 8:00 PM"` into a wall-clock time.
///
/// Only the text before the first `" - "` is read. It must be `H:MM`, optionally
/// followed by `AM` or `PM` (any case). Without a period the hour is read as
/// 24-hour. With a period the hour must be 1 to 12; `12 AM` is midnight and
/// `12 PM` is noon.
pub fn parse_start_time(time: &str) -> Option<NaiveTime> {
    let start = time.split(" - ").next()?.trim();
    let mut tokens = start.split_whitespace();
    let (hours, minutes) = tokens.next()?.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    let hours = match tokens.next() {
        None => hours,
        Some(_) if !(1..=12).contains(&hours) => return None,
        Some(period) if period.eq_ignore_ascii_case("AM") => hours % 12,
        Some(period) if period.eq_ignore_ascii_case("PM") => hours % 12 + 12,
        Some(_) => return None,
    };

    NaiveTime::from_hms_opt(hours, minutes, 0)
}
