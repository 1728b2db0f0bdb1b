//! Meeting time codec.
//!
//! Converts between the three time representations the system touches:
//!
//! - **Raw registrar timestamps** on [`Meeting`] (`1970-01-01T17:30:00.000Z`
//!   — only the time-of-day portion is meaningful)
//! - **Minutes after midnight** ([`TimeWindow`]) — the canonical form every
//!   comparison runs on
//! - **12-hour display labels** (`"5:30pm – 8:15pm"`, or the literal `"TBA"`)
//!
//! Decoding a previously formatted label reproduces the minutes decoded
//! from the raw timestamps, for any meeting on a 1-minute grid.

use crate::models::{Meeting, TimeWindow};

/// Result of decoding a meeting's raw timestamps.
///
/// Three-way so the caller can apply
/// [`MalformedTimePolicy`](crate::models::MalformedTimePolicy) explicitly
/// instead of conflating bad data with TBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMeeting {
    /// The meeting carries no time data.
    Tba,
    /// Decoded time-of-day interval.
    Clock(TimeWindow),
    /// The meeting carries time data that cannot be decoded.
    Malformed,
}

/// Decodes a meeting's raw timestamps into minutes after midnight.
pub fn parse_meeting_minutes(meeting: &Meeting) -> ParsedMeeting {
    let (start_raw, end_raw) = match (&meeting.start_time, &meeting.end_time) {
        (Some(s), Some(e)) => (s, e),
        _ => return ParsedMeeting::Tba,
    };

    match (
        minutes_from_timestamp(start_raw),
        minutes_from_timestamp(end_raw),
    ) {
        (Some(start), Some(end)) => ParsedMeeting::Clock(TimeWindow::new(start, end)),
        _ => ParsedMeeting::Malformed,
    }
}

/// Renders a meeting's time range as a 12-hour label.
///
/// Returns the literal `"TBA"` for the TBA sentinel and for meetings whose
/// raw timestamps cannot be decoded.
pub fn format_meeting_label(meeting: &Meeting) -> String {
    match parse_meeting_minutes(meeting) {
        ParsedMeeting::Clock(range) => format!(
            "{} – {}",
            minute_label(range.start_minute),
            minute_label(range.end_minute)
        ),
        ParsedMeeting::Tba | ParsedMeeting::Malformed => "TBA".to_string(),
    }
}

/// Renders a section's meetings grouped by shared time label.
///
/// Meetings with the same time range are collapsed onto one entry with
/// their day codes concatenated: `"MWF 9:00am – 9:50am | Tu 1:00pm – 2:15pm"`.
/// Returns `"TBA"` for an empty meeting list.
pub fn format_meeting_times(meetings: &[Meeting]) -> String {
    if meetings.is_empty() {
        return "TBA".to_string();
    }

    // Insertion-ordered grouping keeps output deterministic
    let mut groups: Vec<(String, String)> = Vec::new();
    for meeting in meetings {
        let label = format_meeting_label(meeting);
        let index = match groups.iter().position(|(l, _)| *l == label) {
            Some(i) => i,
            None => {
                groups.push((label, String::new()));
                groups.len() - 1
            }
        };
        if let Some(day) = meeting.day {
            groups[index].1.push_str(day.code());
        }
    }

    groups
        .into_iter()
        .map(|(label, days)| {
            if days.is_empty() {
                label
            } else {
                format!("{days} {label}")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Maps a UI slider value (whole or half hours) to minutes after midnight.
pub fn minutes_from_decimal_hour(hour: f64) -> u16 {
    (hour * 60.0).floor() as u16
}

/// Renders a slider value as a 12-hour label (`13.5` → `"1:30pm"`).
pub fn format_decimal_hour_label(hour: f64) -> String {
    minute_label(minutes_from_decimal_hour(hour))
}

/// Renders an hour-axis label (`17` → `"5 PM"`, `0` → `"12 AM"`).
pub fn format_hour(hour: u16) -> String {
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{h12} {meridiem}")
}

/// Parses a previously formatted `"h:mma – h:mmb"` label back into minutes.
///
/// Returns `None` for the literal `"TBA"` or any malformed label; the
/// decode failure is distinct from a zero-length range.
pub fn decode_label_to_minutes(label: &str) -> Option<TimeWindow> {
    if label.is_empty() || label == "TBA" {
        return None;
    }
    let (start_part, end_part) = label.split_once(" – ")?;
    Some(TimeWindow::new(
        minutes_from_label_part(start_part)?,
        minutes_from_label_part(end_part)?,
    ))
}

/// Extracts minutes after midnight from one raw registrar timestamp.
///
/// The time-of-day lives between the `T` and the fractional-seconds dot:
/// `1970-01-01T17:30:00.000Z` → `17:30:00` → 1050.
fn minutes_from_timestamp(raw: &str) -> Option<u16> {
    let time_part = raw.split('T').nth(1)?;
    let time_part = time_part.split('.').next()?;

    let mut fields = time_part.split(':');
    let hours: u16 = fields.next()?.parse().ok()?;
    let minutes: u16 = fields.next()?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Renders minutes after midnight as a 12-hour clock label (`1050` → `"5:30pm"`).
fn minute_label(minute: u16) -> String {
    let hours = minute / 60;
    let minutes = minute % 60;
    let meridiem = if hours >= 12 { "pm" } else { "am" };
    let h12 = (hours + 11) % 12 + 1;
    format!("{h12}:{minutes:02}{meridiem}")
}

/// Parses one half of a label (`"5:30pm"`) into minutes after midnight.
fn minutes_from_label_part(part: &str) -> Option<u16> {
    let (hour_text, rest) = part.split_once(':')?;
    let minute_text = rest.get(..2)?;
    let meridiem = rest.get(2..)?;

    let mut hours: u16 = hour_text.parse().ok()?;
    let minutes: u16 = minute_text.parse().ok()?;
    if hours == 0 || hours > 12 || minutes > 59 {
        return None;
    }

    match meridiem {
        "pm" if hours != 12 => hours += 12,
        "am" if hours == 12 => hours = 0,
        "am" | "pm" => {}
        _ => return None,
    }
    Some(hours * 60 + minutes)
}
