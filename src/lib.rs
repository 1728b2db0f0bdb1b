//! Course timetable generation.
//!
//! Given a list of selected courses and day/time/gap preferences, this
//! crate enumerates every conflict-free combination of class
//! meeting-sections (lecture plus any required lab/discussion) for one
//! academic term.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Section`, `Meeting`, `Day`,
//!   `Constraints`, `Schedule`, `TimeWindow`
//! - **`time`**: Codec between raw registrar timestamps, minutes after
//!   midnight, and 12-hour display labels
//! - **`grouping`**: Per-course lecture/lab/discussion bucketing
//! - **`filters`**: Candidate-list filter predicates (term, instructor,
//!   days, duration)
//! - **`validation`**: Upfront constraint and course-list integrity checks
//! - **`search`**: Pairwise compatibility checking and the backtracking
//!   enumerator
//!
//! # Architecture
//!
//! The crate is the combinatorial core only. Catalog queries, raw-data
//! ingestion, UI, and persistence are the caller's concern: it resolves
//! the candidate course/section lists, translates UI preferences into a
//! minute-based [`Constraints`](models::Constraints) value (the
//! [`time`] codec does the unit conversions), and receives a fully
//! materialized list of [`Schedule`](models::Schedule) values back. The
//! search itself is pure and synchronous — no I/O, no logging, no shared
//! state across invocations.
//!
//! # Example
//!
//! ```
//! use timetabler::models::{Constraints, Course, Day, Meeting, Section};
//! use timetabler::search::{ScheduleSearch, SearchBudget};
//!
//! let algorithms = Course::new("CS301")
//!     .with_section(
//!         Section::new("CS301-01", "CS301", "Fall 2025", "01")
//!             .with_meeting(Meeting::new(
//!                 Day::M,
//!                 "1970-01-01T09:00:00.000Z",
//!                 "1970-01-01T09:50:00.000Z",
//!             ))
//!             .with_meeting(Meeting::new(
//!                 Day::W,
//!                 "1970-01-01T09:00:00.000Z",
//!                 "1970-01-01T09:50:00.000Z",
//!             )),
//!     )
//!     .with_section(
//!         Section::new("CS301-02L", "CS301", "Fall 2025", "02L").with_meeting(Meeting::new(
//!             Day::F,
//!             "1970-01-01T13:00:00.000Z",
//!             "1970-01-01T15:50:00.000Z",
//!         )),
//!     );
//!
//! let constraints = Constraints::new("Fall 2025")
//!     .with_days([Day::M, Day::W, Day::F])
//!     .with_time_window(480, 1080)
//!     .with_minimum_gap(10);
//!
//! let outcome = ScheduleSearch::new()
//!     .with_budget(SearchBudget::unbounded().with_max_schedules(1000))
//!     .generate(&[algorithms], &constraints)
//!     .expect("constraints are well-formed");
//!
//! assert_eq!(outcome.schedules.len(), 1);
//! assert!(outcome.complete);
//! ```
//!
//! # Reference
//!
//! Schaerf (1999), "A Survey of Automated Timetabling"

pub mod filters;
pub mod grouping;
pub mod models;
pub mod search;
pub mod time;
pub mod validation;
