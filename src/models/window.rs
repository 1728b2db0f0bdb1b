//! Minute-of-day interval.
//!
//! All meeting times and constraint windows are expressed as minutes
//! after midnight (0..=1440). Overlap is strict: two intervals that
//! merely touch at an endpoint (one ending exactly when the other
//! starts) do not overlap.

use serde::{Deserialize, Serialize};

/// A time-of-day interval in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (minutes after midnight).
    pub start_minute: u16,
    /// Interval end (minutes after midnight).
    pub end_minute: u16,
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start_minute: u16, end_minute: u16) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Length of this window in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether `other` lies entirely within this window (endpoints allowed).
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.start_minute >= self.start_minute && other.end_minute <= self.end_minute
    }

    /// Whether two windows overlap. Touching endpoints do not count.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// One-sided gap in minutes between two non-overlapping windows.
    ///
    /// If `self` starts at or after `other` ends, the gap is measured from
    /// `other`'s end to `self`'s start; otherwise from `self`'s end to
    /// `other`'s start. Meaningless for overlapping windows (check
    /// [`overlaps`](Self::overlaps) first).
    #[inline]
    pub fn gap_to(&self, other: &Self) -> u16 {
        if self.start_minute >= other.end_minute {
            self.start_minute - other.end_minute
        } else {
            other.start_minute.saturating_sub(self.end_minute)
        }
    }
}
