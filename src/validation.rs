//! Input validation for schedule searches.
//!
//! Checks constraint sanity and the structural integrity of the course
//! list before the search runs. Contradictory constraints (an inverted
//! time window, an empty day set) would otherwise drive every candidate
//! to rejection and surface only as a silent empty result; validating
//! upfront turns them into descriptive errors instead.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Constraints, Course};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The time window ends at or before it starts.
    InvertedTimeWindow,
    /// No days are selected.
    EmptyDaySet,
    /// The selected term is blank.
    EmptyTerm,
    /// Two entities share the same ID.
    DuplicateId,
    /// A section's `course_id` differs from its parent course.
    MismatchedCourseReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates constraints and course-list integrity for one search.
///
/// Checks:
/// 1. The time window starts strictly before it ends
/// 2. At least one day is selected
/// 3. The selected term is non-blank
/// 4. No duplicate course IDs
/// 5. No duplicate section IDs (across all courses)
/// 6. Every section's `course_id` matches its parent course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], constraints: &Constraints) -> ValidationResult {
    let mut errors = Vec::new();

    if constraints.time_window.start_minute >= constraints.time_window.end_minute {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedTimeWindow,
            format!(
                "Time window starts at minute {} but ends at minute {}",
                constraints.time_window.start_minute, constraints.time_window.end_minute
            ),
        ));
    }

    if constraints.selected_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDaySet,
            "No days selected; every timed meeting would be rejected",
        ));
    }

    if constraints.selected_term.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTerm,
            "Selected term is blank",
        ));
    }

    let mut course_ids = HashSet::new();
    let mut section_ids = HashSet::new();

    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        for section in &course.sections {
            if !section_ids.insert(section.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate section ID: {}", section.id),
                ));
            }
            if section.course_id != course.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MismatchedCourseReference,
                    format!(
                        "Section '{}' claims course '{}' but belongs to course '{}'",
                        section.id, section.course_id, course.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
