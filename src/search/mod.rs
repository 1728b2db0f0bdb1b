//! Schedule search: compatibility checking and backtracking enumeration.
//!
//! `ScheduleSearch` enumerates every conflict-free combination of
//! meeting-sections across the selected courses; `is_section_compatible`
//! is the pairwise admission test it applies at each step. The search is
//! exhaustive within its [`SearchBudget`] — it finds all solutions, not a
//! best one.
//!
//! # Reference
//!
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod compat;
mod dfs;

pub use compat::is_section_compatible;
pub use dfs::{ScheduleSearch, SearchBudget, SearchOutcome};
