//! Course model.

use serde::{Deserialize, Serialize};

use super::Section;

/// A course the user selected, with its full candidate section list.
///
/// Read-only input: the caller owns it for the lifetime of one search
/// invocation and the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g. `"CS101"`).
    pub id: String,
    /// Candidate sections across all terms and slot kinds.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a candidate section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let course = Course::new("CS101")
            .with_section(Section::new("CS101-01", "CS101", "Fall 2025", "01"))
            .with_section(Section::new("CS101-03L", "CS101", "Fall 2025", "03L"));
        assert_eq!(course.id, "CS101");
        assert_eq!(course.sections.len(), 2);
    }
}
