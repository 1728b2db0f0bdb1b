//! Section grouping.
//!
//! Partitions one course's candidate sections into lecture, lab, and
//! discussion buckets for the active term. Sections outside the term and
//! sections with zero meetings (unschedulable) are discarded before
//! classification.
//!
//! A course "requires" a satellite slot only when that bucket is
//! non-empty: if both lab and discussion buckets are empty, a bare
//! lecture stands alone as a complete per-course selection.

use crate::models::{Course, Section, SlotKind};

/// One course's eligible sections, partitioned by slot kind.
#[derive(Debug, Clone, Default)]
pub struct SectionBuckets<'a> {
    /// Lecture candidates, in input order.
    pub lectures: Vec<&'a Section>,
    /// Lab candidates, in input order.
    pub labs: Vec<&'a Section>,
    /// Discussion candidates, in input order.
    pub discussions: Vec<&'a Section>,
}

impl<'a> SectionBuckets<'a> {
    /// Whether the course requires a lab or discussion alongside the lecture.
    pub fn has_satellites(&self) -> bool {
        !self.labs.is_empty() || !self.discussions.is_empty()
    }

    /// Whether no section of any kind survived filtering.
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty() && self.labs.is_empty() && self.discussions.is_empty()
    }
}

/// Partitions a course's candidate sections into per-kind buckets.
///
/// Keeps only sections whose term matches `term` exactly and that have at
/// least one meeting, then classifies by the section's carried
/// [`SlotKind`]. Input order is preserved within each bucket.
pub fn group_sections<'a>(course: &'a Course, term: &str) -> SectionBuckets<'a> {
    let mut buckets = SectionBuckets::default();

    for section in &course.sections {
        if section.term != term || !section.is_schedulable() {
            continue;
        }
        match section.slot_kind {
            SlotKind::Lecture => buckets.lectures.push(section),
            SlotKind::Lab => buckets.labs.push(section),
            SlotKind::Discussion => buckets.discussions.push(section),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Meeting};

    fn section(id: &str, term: &str, number: &str) -> Section {
        Section::new(id, "CS101", term, number).with_meeting(Meeting::new(
            Day::M,
            "1970-01-01T09:00:00.000Z",
            "1970-01-01T09:50:00.000Z",
        ))
    }

    #[test]
    fn test_partitions_by_slot_kind() {
        let course = Course::new("CS101")
            .with_section(section("CS101-01", "Fall 2025", "01"))
            .with_section(section("CS101-02", "Fall 2025", "02"))
            .with_section(section("CS101-03L", "Fall 2025", "03L"))
            .with_section(section("CS101-04D", "Fall 2025", "04D"));

        let buckets = group_sections(&course, "Fall 2025");
        assert_eq!(buckets.lectures.len(), 2);
        assert_eq!(buckets.labs.len(), 1);
        assert_eq!(buckets.discussions.len(), 1);
        assert!(buckets.has_satellites());
    }

    #[test]
    fn test_discards_other_terms() {
        let course = Course::new("CS101")
            .with_section(section("CS101-01", "Fall 2025", "01"))
            .with_section(section("CS101-01S", "Spring 2026", "01"));

        let buckets = group_sections(&course, "Fall 2025");
        assert_eq!(buckets.lectures.len(), 1);
        assert_eq!(buckets.lectures[0].id, "CS101-01");
    }

    #[test]
    fn test_discards_zero_meeting_sections() {
        let course = Course::new("CS101")
            .with_section(Section::new("CS101-01", "CS101", "Fall 2025", "01"))
            .with_section(section("CS101-02", "Fall 2025", "02"));

        let buckets = group_sections(&course, "Fall 2025");
        assert_eq!(buckets.lectures.len(), 1);
        assert_eq!(buckets.lectures[0].id, "CS101-02");
    }

    #[test]
    fn test_bare_lecture_course() {
        let course = Course::new("CS101").with_section(section("CS101-01", "Fall 2025", "01"));
        let buckets = group_sections(&course, "Fall 2025");
        assert!(!buckets.has_satellites());
        assert!(!buckets.is_empty());
    }

    #[test]
    fn test_everything_filtered_out() {
        let course =
            Course::new("CS101").with_section(Section::new("CS101-01", "CS101", "Fall 2025", "01"));
        let buckets = group_sections(&course, "Fall 2025");
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_input_order_preserved() {
        let course = Course::new("CS101")
            .with_section(section("CS101-02", "Fall 2025", "02"))
            .with_section(section("CS101-01", "Fall 2025", "01"));
        let buckets = group_sections(&course, "Fall 2025");
        assert_eq!(buckets.lectures[0].id, "CS101-02");
        assert_eq!(buckets.lectures[1].id, "CS101-01");
    }
}
