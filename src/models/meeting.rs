//! Class meeting model.
//!
//! A meeting is an immutable fact produced by the ingestion layer: a day,
//! raw registrar start/end timestamps, and a location. A meeting missing
//! either raw time is **TBA** — it carries no time constraint and is
//! compatible with everything.
//!
//! The raw timestamps look like `1970-01-01T17:30:00.000Z`; only the
//! time-of-day portion is meaningful. Decoding them into minutes after
//! midnight is the job of the [`time`](crate::time) codec.

use serde::{Deserialize, Serialize};

use super::Day;

/// One class meeting of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day the meeting falls on, if the registrar published one.
    pub day: Option<Day>,
    /// Raw registrar start timestamp (e.g. `1970-01-01T09:00:00.000Z`).
    pub start_time: Option<String>,
    /// Raw registrar end timestamp.
    pub end_time: Option<String>,
    /// Room or building, if published.
    pub location: Option<String>,
}

impl Meeting {
    /// Creates a meeting with a day and raw start/end timestamps.
    pub fn new(day: Day, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day: Some(day),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            location: None,
        }
    }

    /// Creates a TBA meeting (no day, no times, no location).
    pub fn tba() -> Self {
        Self {
            day: None,
            start_time: None,
            end_time: None,
            location: None,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether this meeting is the TBA sentinel (missing either raw time).
    pub fn is_tba(&self) -> bool {
        self.start_time.is_none() || self.end_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tba_detection() {
        assert!(Meeting::tba().is_tba());

        let half = Meeting {
            day: Some(Day::M),
            start_time: Some("1970-01-01T09:00:00.000Z".into()),
            end_time: None,
            location: None,
        };
        assert!(half.is_tba());

        let full = Meeting::new(Day::M, "1970-01-01T09:00:00.000Z", "1970-01-01T09:50:00.000Z");
        assert!(!full.is_tba());
    }

    #[test]
    fn test_builder() {
        let m = Meeting::new(Day::Tu, "1970-01-01T13:00:00.000Z", "1970-01-01T14:15:00.000Z")
            .with_location("OLMH 120");
        assert_eq!(m.day, Some(Day::Tu));
        assert_eq!(m.location.as_deref(), Some("OLMH 120"));
    }
}
