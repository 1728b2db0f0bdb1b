//! Schedule (output) model.
//!
//! A schedule is one complete, conflict-free selection of sections: one
//! lecture per course plus any lab/discussion satellites that course
//! requires, in input-course order. Schedules are ephemeral output
//! values — cloned from the inputs and never mutated after being
//! produced.

use serde::{Deserialize, Serialize};

use super::Section;

/// A complete conflict-free selection of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Chosen sections, in input-course order (a course's lecture
    /// immediately followed by its satellites).
    pub sections: Vec<Section>,
}

impl Schedule {
    /// Creates a schedule from an ordered section list.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Number of sections in the schedule.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over the chosen sections.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// The sections chosen for one course.
    pub fn sections_for_course<'a>(
        &'a self,
        course_id: &'a str,
    ) -> impl Iterator<Item = &'a Section> {
        self.sections
            .iter()
            .filter(move |s| s.course_id == course_id)
    }
}
