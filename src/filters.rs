//! Section filter predicates.
//!
//! Pure helpers for narrowing a candidate section list before a search:
//! term, instructor, day coverage, and meeting duration. Each predicate
//! treats an absent filter value (`None` / empty) as "matches
//! everything", so callers can chain them over optional UI inputs.

use crate::models::{Day, Section};
use crate::time::{parse_meeting_minutes, ParsedMeeting};

/// Whether a section belongs to a term (case-insensitive).
///
/// `None` matches every section.
pub fn section_matches_term(section: &Section, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) => section.term.eq_ignore_ascii_case(term),
    }
}

/// Whether any of a section's instructors matches a partial name
/// (case-insensitive substring).
///
/// `None` matches every section.
pub fn section_matches_instructor(section: &Section, name: Option<&str>) -> bool {
    match name {
        None => true,
        Some(name) => {
            let search = name.to_lowercase();
            section
                .instructors
                .iter()
                .any(|inst| inst.to_lowercase().contains(&search))
        }
    }
}

/// Whether a section's meetings cover every selected day.
///
/// An empty day list matches every section.
pub fn section_matches_days(section: &Section, filter_days: &[Day]) -> bool {
    if filter_days.is_empty() {
        return true;
    }
    filter_days
        .iter()
        .all(|day| section.meetings.iter().any(|m| m.day == Some(*day)))
}

/// Whether any of a section's meetings has exactly this length in minutes.
///
/// `None` matches every section. TBA and undecodable meetings never match.
pub fn section_matches_duration(section: &Section, duration_minutes: Option<u16>) -> bool {
    match duration_minutes {
        None => true,
        Some(duration) => section.meetings.iter().any(|meeting| {
            match parse_meeting_minutes(meeting) {
                ParsedMeeting::Clock(range) => range.duration_minutes() == duration,
                ParsedMeeting::Tba | ParsedMeeting::Malformed => false,
            }
        }),
    }
}
