//! Timetabling domain models.
//!
//! Core data types for representing one term's schedule-generation
//! problem and its solutions. All types are plain serde-serializable
//! values: the engine owns no state, and the caller moves these across
//! its own API boundary as needed.
//!
//! # Time Model
//!
//! All times are minutes after midnight (`u16`, 0..=1440). Raw registrar
//! timestamps live on [`Meeting`] untouched; the [`time`](crate::time)
//! codec decodes them on demand.

mod constraints;
mod course;
mod day;
mod meeting;
mod schedule;
mod section;
mod window;

pub use constraints::{Constraints, MalformedTimePolicy};
pub use course::Course;
pub use day::{Day, ParseDayError};
pub use meeting::Meeting;
pub use schedule::Schedule;
pub use section::{Section, SlotKind};
pub use window::TimeWindow;
