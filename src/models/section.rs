//! Section and slot-kind models.
//!
//! A section is one offering of a course: a section number, a term, the
//! instructors teaching it, and its meetings. The registrar encodes the
//! slot kind in the section number's trailing letter (`…L` lab, `…D`
//! discussion, anything else lecture); the kind is decoded once at
//! construction and carried on the value so grouping never re-inspects
//! the string.

use serde::{Deserialize, Serialize};

use super::Meeting;

/// The category a section fills within a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Primary lecture meeting.
    #[default]
    Lecture,
    /// Laboratory satellite section.
    Lab,
    /// Discussion satellite section.
    Discussion,
}

impl SlotKind {
    /// Decodes the slot kind from a section number's trailing letter.
    ///
    /// `"03L"` → `Lab`, `"02D"` → `Discussion`, `"01"` → `Lecture`.
    pub fn from_section_number(section_number: &str) -> Self {
        if section_number.ends_with('L') {
            SlotKind::Lab
        } else if section_number.ends_with('D') {
            SlotKind::Discussion
        } else {
            SlotKind::Lecture
        }
    }
}

/// One offering of a course in a specific term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier, unique across the input.
    pub id: String,
    /// Owning course identifier.
    pub course_id: String,
    /// Academic term this section runs in (e.g. `"Fall 2025"`).
    pub term: String,
    /// Registrar section number (e.g. `"01"`, `"03L"`).
    pub section_number: String,
    /// Slot kind, decoded from the section number at construction.
    pub slot_kind: SlotKind,
    /// Instructor display names.
    pub instructors: Vec<String>,
    /// Class meetings. A section with zero meetings is unschedulable.
    pub meetings: Vec<Meeting>,
}

impl Section {
    /// Creates a section, decoding the slot kind from the section number.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        term: impl Into<String>,
        section_number: impl Into<String>,
    ) -> Self {
        let section_number = section_number.into();
        let slot_kind = SlotKind::from_section_number(&section_number);
        Self {
            id: id.into(),
            course_id: course_id.into(),
            term: term.into(),
            section_number,
            slot_kind,
            instructors: Vec::new(),
            meetings: Vec::new(),
        }
    }

    /// Overrides the decoded slot kind.
    ///
    /// For feeds where the kind is published explicitly instead of being
    /// encoded in the section number.
    pub fn with_slot_kind(mut self, kind: SlotKind) -> Self {
        self.slot_kind = kind;
        self
    }

    /// Adds a meeting.
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Adds an instructor display name.
    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructors.push(name.into());
        self
    }

    /// Whether the section has at least one meeting and can be scheduled.
    pub fn is_schedulable(&self) -> bool {
        !self.meetings.is_empty()
    }
}
