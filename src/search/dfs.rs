//! Backtracking schedule enumeration.
//!
//! Walks the course list depth-first, committing one per-course selection
//! (lecture plus any required lab/discussion) at a time and checking each
//! candidate against the accumulating partial schedule. Every branch that
//! reaches the end of the course list yields one complete schedule; a
//! branch with no admissible candidate simply contributes nothing.
//!
//! # Algorithm
//!
//! 1. Partition the current course's in-term sections into
//!    lecture/lab/discussion buckets.
//! 2. For each compatible lecture, try each lab (or none when the course
//!    has no labs), then each discussion (or none), checking every
//!    candidate against the partial schedule extended so far.
//! 3. Recurse into the next course with the selection appended; collect
//!    the schedules of every sub-branch.
//!
//! The search explores the full cross-product of admissible combinations —
//! no pruning beyond the pairwise compatibility test and no deduplication
//! of structurally equivalent sections. Worst-case cost is combinatorial
//! in the number of interchangeable sections per course; the
//! [`SearchBudget`] caps it.
//!
//! Recursion depth equals the course count, which is small in practice
//! (tens), so the implicit call stack is safe.

use serde::{Deserialize, Serialize};

use crate::grouping::group_sections;
use crate::models::{Constraints, Course, Schedule, Section};
use crate::validation::{validate_input, ValidationError};

use super::compat::is_section_compatible;

/// Caps on the enumeration. Both caps default to unbounded.
///
/// A "node" is one candidate compatibility evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Stop after collecting this many schedules.
    pub max_schedules: Option<usize>,
    /// Stop after this many candidate evaluations.
    pub max_nodes: Option<u64>,
}

impl SearchBudget {
    /// No caps.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Caps the number of collected schedules.
    pub fn with_max_schedules(mut self, max: usize) -> Self {
        self.max_schedules = Some(max);
        self
    }

    /// Caps the number of candidate evaluations.
    pub fn with_max_nodes(mut self, max: u64) -> Self {
        self.max_nodes = Some(max);
        self
    }
}

/// Result of one search invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Every complete valid schedule found, in deterministic input order.
    pub schedules: Vec<Schedule>,
    /// Candidate compatibility evaluations performed.
    pub nodes_visited: u64,
    /// `false` when a budget cap halted the enumeration before it finished.
    pub complete: bool,
}

/// The backtracking schedule enumerator.
///
/// Pure and synchronous: no I/O, no shared state across invocations.
/// Independent searches may run concurrently as long as each one's input
/// courses are not mutated during the call.
///
/// # Example
///
/// ```
/// use timetabler::models::{Constraints, Course, Day, Meeting, Section};
/// use timetabler::search::ScheduleSearch;
///
/// let course = Course::new("CS101").with_section(
///     Section::new("CS101-01", "CS101", "Fall 2025", "01").with_meeting(
///         Meeting::new(Day::M, "1970-01-01T09:00:00.000Z", "1970-01-01T09:50:00.000Z"),
///     ),
/// );
/// let constraints = Constraints::new("Fall 2025");
///
/// let outcome = ScheduleSearch::new().generate(&[course], &constraints).unwrap();
/// assert_eq!(outcome.schedules.len(), 1);
/// assert!(outcome.complete);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleSearch {
    budget: SearchBudget,
}

impl ScheduleSearch {
    /// Creates an unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Enumerates every conflict-free schedule for the given courses.
    ///
    /// Validates the inputs first and fails fast with the collected
    /// errors. An empty schedule list is normal control flow — it means
    /// no feasible combination exists — never an error.
    pub fn generate(
        &self,
        courses: &[Course],
        constraints: &Constraints,
    ) -> Result<SearchOutcome, Vec<ValidationError>> {
        validate_input(courses, constraints)?;

        let mut state = SearchState {
            schedules: Vec::new(),
            nodes_visited: 0,
            truncated: false,
            budget: self.budget,
        };
        let mut partial: Vec<&Section> = Vec::new();
        self.walk(courses, constraints, 0, &mut partial, &mut state);

        Ok(SearchOutcome {
            schedules: state.schedules,
            nodes_visited: state.nodes_visited,
            complete: !state.truncated,
        })
    }

    fn walk<'a>(
        &self,
        courses: &'a [Course],
        constraints: &Constraints,
        index: usize,
        partial: &mut Vec<&'a Section>,
        state: &mut SearchState,
    ) {
        if state.truncated {
            return;
        }
        if index == courses.len() {
            state.emit(partial);
            return;
        }

        let buckets = group_sections(&courses[index], &constraints.selected_term);

        if buckets.has_satellites() {
            // Placeholder None stands in for an absent satellite bucket so
            // the lecture x lab x discussion cross-product stays uniform
            let labs_to_try: Vec<Option<&Section>> = if buckets.labs.is_empty() {
                vec![None]
            } else {
                buckets.labs.iter().copied().map(Some).collect()
            };
            let discussions_to_try: Vec<Option<&Section>> = if buckets.discussions.is_empty() {
                vec![None]
            } else {
                buckets.discussions.iter().copied().map(Some).collect()
            };

            for &lecture in &buckets.lectures {
                if !state.check(lecture, partial, constraints) {
                    if state.truncated {
                        return;
                    }
                    continue;
                }
                partial.push(lecture);

                for &lab in &labs_to_try {
                    if let Some(lab) = lab {
                        if !state.check(lab, partial, constraints) {
                            if state.truncated {
                                return;
                            }
                            continue;
                        }
                        partial.push(lab);
                    }

                    for &discussion in &discussions_to_try {
                        if let Some(discussion) = discussion {
                            if !state.check(discussion, partial, constraints) {
                                if state.truncated {
                                    return;
                                }
                                continue;
                            }
                            partial.push(discussion);
                        }

                        self.walk(courses, constraints, index + 1, partial, state);

                        if discussion.is_some() {
                            partial.pop();
                        }
                        if state.truncated {
                            return;
                        }
                    }

                    if lab.is_some() {
                        partial.pop();
                    }
                }

                partial.pop();
            }
        } else {
            for &lecture in &buckets.lectures {
                if !state.check(lecture, partial, constraints) {
                    if state.truncated {
                        return;
                    }
                    continue;
                }
                partial.push(lecture);
                self.walk(courses, constraints, index + 1, partial, state);
                partial.pop();
                if state.truncated {
                    return;
                }
            }
        }
    }
}

struct SearchState {
    schedules: Vec<Schedule>,
    nodes_visited: u64,
    truncated: bool,
    budget: SearchBudget,
}

impl SearchState {
    /// Evaluates one candidate against the partial schedule, charging the
    /// node budget. Returns `false` on incompatibility or budget
    /// exhaustion (the latter also sets `truncated`).
    fn check(&mut self, candidate: &Section, committed: &[&Section], constraints: &Constraints) -> bool {
        if let Some(max) = self.budget.max_nodes {
            if self.nodes_visited >= max {
                self.truncated = true;
                return false;
            }
        }
        self.nodes_visited += 1;
        is_section_compatible(candidate, committed, constraints)
    }

    /// Records one complete schedule, charging the schedule budget.
    fn emit(&mut self, partial: &[&Section]) {
        self.schedules
            .push(Schedule::new(partial.iter().map(|s| (*s).clone()).collect()));
        if let Some(max) = self.budget.max_schedules {
            if self.schedules.len() >= max {
                self.truncated = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Meeting};
    use crate::time::parse_meeting_minutes;
    use crate::time::ParsedMeeting;

    fn meeting(day: Day, start: &str, end: &str) -> Meeting {
        Meeting::new(
            day,
            format!("1970-01-01T{start}:00.000Z"),
            format!("1970-01-01T{end}:00.000Z"),
        )
    }

    fn section(course: &str, number: &str, meetings: Vec<Meeting>) -> Section {
        let mut s = Section::new(
            format!("{course}-{number}"),
            course,
            "Fall 2025",
            number,
        );
        s.meetings = meetings;
        s
    }

    fn constraints() -> Constraints {
        Constraints::new("Fall 2025")
            .with_days([Day::M, Day::Tu, Day::W, Day::Th, Day::F])
            .with_time_window(480, 1080) // 8:00-18:00
    }

    /// Course A: lecture M 9:00-9:50 + lab W 9:00-9:50.
    /// Course B: lecture M 10:00-10:50.
    fn two_course_input() -> Vec<Course> {
        vec![
            Course::new("A")
                .with_section(section("A", "01", vec![meeting(Day::M, "09:00", "09:50")]))
                .with_section(section("A", "02L", vec![meeting(Day::W, "09:00", "09:50")])),
            Course::new("B")
                .with_section(section("B", "01", vec![meeting(Day::M, "10:00", "10:50")])),
        ]
    }

    #[test]
    fn test_minimal_completeness() {
        let outcome = ScheduleSearch::new()
            .generate(&two_course_input(), &constraints())
            .unwrap();

        assert!(outcome.complete);
        assert_eq!(outcome.schedules.len(), 1);
        let ids: Vec<&str> = outcome.schedules[0].iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["A-01", "A-02L", "B-01"]);
    }

    #[test]
    fn test_gap_rejection() {
        // The M 9:50 -> 10:00 gap is 10 minutes; a 120-minute floor kills it
        let cons = constraints().with_minimum_gap(120);
        let outcome = ScheduleSearch::new()
            .generate(&two_course_input(), &cons)
            .unwrap();
        assert!(outcome.schedules.is_empty());
        assert!(outcome.complete);
    }

    #[test]
    fn test_unschedulable_course_propagates_emptiness() {
        let mut courses = two_course_input();
        // C's only section has zero meetings
        courses.push(Course::new("C").with_section(Section::new("C-01", "C", "Fall 2025", "01")));

        let outcome = ScheduleSearch::new().generate(&courses, &constraints()).unwrap();
        assert!(outcome.schedules.is_empty());
    }

    #[test]
    fn test_cross_product_of_satellites() {
        // 2 lectures x 2 labs, all mutually compatible -> 4 schedules
        let course = Course::new("A")
            .with_section(section("A", "01", vec![meeting(Day::M, "09:00", "09:50")]))
            .with_section(section("A", "02", vec![meeting(Day::Tu, "09:00", "09:50")]))
            .with_section(section("A", "03L", vec![meeting(Day::W, "09:00", "09:50")]))
            .with_section(section("A", "04L", vec![meeting(Day::Th, "09:00", "09:50")]));

        let outcome = ScheduleSearch::new().generate(&[course], &constraints()).unwrap();
        assert_eq!(outcome.schedules.len(), 4);
        for schedule in &outcome.schedules {
            assert_eq!(schedule.len(), 2); // lecture + lab
        }
    }

    #[test]
    fn test_discussion_without_lab() {
        let course = Course::new("A")
            .with_section(section("A", "01", vec![meeting(Day::M, "09:00", "09:50")]))
            .with_section(section("A", "02D", vec![meeting(Day::W, "13:00", "13:50")]));

        let outcome = ScheduleSearch::new().generate(&[course], &constraints()).unwrap();
        assert_eq!(outcome.schedules.len(), 1);
        let ids: Vec<&str> = outcome.schedules[0].iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["A-01", "A-02D"]);
    }

    #[test]
    fn test_determinism() {
        let courses = two_course_input();
        let first = ScheduleSearch::new().generate(&courses, &constraints()).unwrap();
        let second = ScheduleSearch::new().generate(&courses, &constraints()).unwrap();
        assert_eq!(first.schedules, second.schedules);
        assert_eq!(first.nodes_visited, second.nodes_visited);
    }

    #[test]
    fn test_no_conflict_invariant_holds() {
        // Two interchangeable lectures per course, overlapping across courses
        let courses = vec![
            Course::new("A")
                .with_section(section("A", "01", vec![meeting(Day::M, "09:00", "09:50")]))
                .with_section(section("A", "02", vec![meeting(Day::M, "10:00", "10:50")])),
            Course::new("B")
                .with_section(section("B", "01", vec![meeting(Day::M, "09:30", "10:20")]))
                .with_section(section("B", "02", vec![meeting(Day::M, "11:00", "11:50")])),
        ];
        let cons = constraints().with_minimum_gap(10);
        let outcome = ScheduleSearch::new().generate(&courses, &cons).unwrap();
        assert!(!outcome.schedules.is_empty());

        for schedule in &outcome.schedules {
            for (i, a) in schedule.iter().enumerate() {
                assert_eq!(a.term, "Fall 2025");
                for b in schedule.sections.iter().skip(i + 1) {
                    for (ma, mb) in a.meetings.iter().flat_map(|ma| {
                        b.meetings.iter().map(move |mb| (ma, mb))
                    }) {
                        if ma.day != mb.day {
                            continue;
                        }
                        let (ra, rb) = match (parse_meeting_minutes(ma), parse_meeting_minutes(mb))
                        {
                            (ParsedMeeting::Clock(ra), ParsedMeeting::Clock(rb)) => (ra, rb),
                            _ => continue,
                        };
                        assert!(!ra.overlaps(&rb));
                        assert!(ra.gap_to(&rb) >= cons.minimum_gap_minutes);
                    }
                }
            }
        }
    }

    #[test]
    fn test_schedule_budget_truncates() {
        let budget = SearchBudget::unbounded().with_max_schedules(2);
        let course = Course::new("A")
            .with_section(section("A", "01", vec![meeting(Day::M, "09:00", "09:50")]))
            .with_section(section("A", "02", vec![meeting(Day::Tu, "09:00", "09:50")]))
            .with_section(section("A", "03", vec![meeting(Day::W, "09:00", "09:50")]));

        let outcome = ScheduleSearch::new()
            .with_budget(budget)
            .generate(&[course], &constraints())
            .unwrap();
        assert_eq!(outcome.schedules.len(), 2);
        assert!(!outcome.complete);
    }

    #[test]
    fn test_node_budget_truncates() {
        let budget = SearchBudget::unbounded().with_max_nodes(1);
        let outcome = ScheduleSearch::new()
            .with_budget(budget)
            .generate(&two_course_input(), &constraints())
            .unwrap();
        assert!(!outcome.complete);
        assert_eq!(outcome.nodes_visited, 1);
    }

    #[test]
    fn test_validation_fails_fast() {
        let cons = Constraints::new("Fall 2025").with_time_window(1080, 480);
        let errors = ScheduleSearch::new()
            .generate(&two_course_input(), &cons)
            .unwrap_err();
        assert!(!errors.is_empty());

        let cons = constraints().with_days(Vec::<Day>::new());
        assert!(ScheduleSearch::new()
            .generate(&two_course_input(), &cons)
            .is_err());
    }

    #[test]
    fn test_empty_course_list_yields_one_empty_schedule() {
        let outcome = ScheduleSearch::new().generate(&[], &constraints()).unwrap();
        assert_eq!(outcome.schedules.len(), 1);
        assert!(outcome.schedules[0].is_empty());
    }

    #[test]
    fn test_tba_section_fits_anywhere() {
        let mut courses = two_course_input();
        courses.push(
            Course::new("C").with_section(section("C", "01", vec![Meeting::tba()])),
        );
        let outcome = ScheduleSearch::new().generate(&courses, &constraints()).unwrap();
        assert_eq!(outcome.schedules.len(), 1);
        assert_eq!(outcome.schedules[0].len(), 4);
    }
}
