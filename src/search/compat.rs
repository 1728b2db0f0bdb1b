//! Pairwise section compatibility.
//!
//! Decides whether one candidate section may join an in-progress partial
//! schedule under the active constraints. The verdict is symmetric in
//! effect — the order of already-committed sections never changes it —
//! but the check runs incrementally as the search commits sections.

use crate::models::{Constraints, MalformedTimePolicy, Meeting, Section, TimeWindow};
use crate::time::{parse_meeting_minutes, ParsedMeeting};

/// Whether `candidate` can be added to `committed` under `constraints`.
///
/// A candidate is compatible when its term matches and every one of its
/// meetings passes all of:
///
/// 1. TBA meetings pass unconditionally.
/// 2. The meeting's day (when present) is among the selected days.
/// 3. The meeting lies entirely inside the time window (strict
///    containment, not mere overlap).
/// 4. Against every decodable same-day meeting of every committed
///    section: no overlap (touching endpoints allowed), and a one-sided
///    gap of at least `minimum_gap_minutes`.
pub fn is_section_compatible(
    candidate: &Section,
    committed: &[&Section],
    constraints: &Constraints,
) -> bool {
    if candidate.term != constraints.selected_term {
        return false;
    }

    for meeting in &candidate.meetings {
        let range = match classify(meeting, constraints) {
            MeetingVerdict::Unconstrained => continue,
            MeetingVerdict::Disqualified => return false,
            MeetingVerdict::Clock(range) => range,
        };

        if let Some(day) = meeting.day {
            if !constraints.allows_day(day) {
                return false;
            }
        }

        if !constraints.time_window.contains(&range) {
            return false;
        }

        for section in committed {
            for other in &section.meetings {
                if other.day.is_none() || other.day != meeting.day {
                    continue;
                }
                let other_range = match parse_meeting_minutes(other) {
                    ParsedMeeting::Clock(r) => r,
                    // Committed TBA/undecodable meetings constrain nothing
                    ParsedMeeting::Tba | ParsedMeeting::Malformed => continue,
                };

                if range.overlaps(&other_range) {
                    return false;
                }
                if range.gap_to(&other_range) < constraints.minimum_gap_minutes {
                    return false;
                }
            }
        }
    }

    true
}

enum MeetingVerdict {
    Unconstrained,
    Disqualified,
    Clock(TimeWindow),
}

fn classify(meeting: &Meeting, constraints: &Constraints) -> MeetingVerdict {
    match parse_meeting_minutes(meeting) {
        ParsedMeeting::Tba => MeetingVerdict::Unconstrained,
        ParsedMeeting::Clock(range) => MeetingVerdict::Clock(range),
        ParsedMeeting::Malformed => match constraints.malformed_times {
            MalformedTimePolicy::TreatAsTba => MeetingVerdict::Unconstrained,
            MalformedTimePolicy::Reject => MeetingVerdict::Disqualified,
        },
    }
}
