//! Search constraints.
//!
//! Carries the user's day/term/gap/time-window preferences, already
//! translated from UI units into minutes after midnight (the
//! [`time`](crate::time) codec does the translation).

use serde::{Deserialize, Serialize};

use super::{Day, TimeWindow};

/// How the compatibility check treats a meeting whose raw time text
/// cannot be decoded.
///
/// The registrar feed occasionally carries malformed timestamps. The
/// historical behavior is to treat such a meeting as unconstrained,
/// like TBA; `Reject` instead disqualifies the section so bad records
/// surface during debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedTimePolicy {
    /// Skip the meeting as if it were TBA (default).
    #[default]
    TreatAsTba,
    /// Disqualify any section carrying an undecodable meeting.
    Reject,
}

/// Active constraints for one schedule search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Term every scheduled section must belong to.
    pub selected_term: String,
    /// Days meetings are allowed to fall on.
    pub selected_days: Vec<Day>,
    /// Minimum idle minutes between non-overlapping same-day meetings.
    pub minimum_gap_minutes: u16,
    /// Time-of-day window every meeting must fit inside.
    pub time_window: TimeWindow,
    /// Handling of undecodable meeting times.
    pub malformed_times: MalformedTimePolicy,
}

impl Constraints {
    /// Creates constraints for a term with permissive defaults: all seven
    /// days, the full day as the time window, zero minimum gap.
    pub fn new(selected_term: impl Into<String>) -> Self {
        Self {
            selected_term: selected_term.into(),
            selected_days: Day::ALL.to_vec(),
            minimum_gap_minutes: 0,
            time_window: TimeWindow::new(0, 1440),
            malformed_times: MalformedTimePolicy::default(),
        }
    }

    /// Sets the allowed days.
    pub fn with_days(mut self, days: impl Into<Vec<Day>>) -> Self {
        self.selected_days = days.into();
        self
    }

    /// Sets the minimum gap between same-day meetings.
    pub fn with_minimum_gap(mut self, minutes: u16) -> Self {
        self.minimum_gap_minutes = minutes;
        self
    }

    /// Sets the time-of-day window (minutes after midnight).
    pub fn with_time_window(mut self, start_minute: u16, end_minute: u16) -> Self {
        self.time_window = TimeWindow::new(start_minute, end_minute);
        self
    }

    /// Sets the malformed-time policy.
    pub fn with_malformed_times(mut self, policy: MalformedTimePolicy) -> Self {
        self.malformed_times = policy;
        self
    }

    /// Whether a day is among the selected days.
    pub fn allows_day(&self, day: Day) -> bool {
        self.selected_days.contains(&day)
    }
}
