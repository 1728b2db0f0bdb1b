//! Meeting day model.
//!
//! Days use the registrar's two-letter-maximum codes (`M`, `Tu`, `W`,
//! `Th`, `F`, `Sa`, `Su`). These codes are also the serialized form,
//! so ingested records round-trip without a mapping table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the week a class meeting can fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday.
    M,
    /// Tuesday.
    Tu,
    /// Wednesday.
    W,
    /// Thursday.
    Th,
    /// Friday.
    F,
    /// Saturday.
    Sa,
    /// Sunday.
    Su,
}

impl Day {
    /// All seven days in week order.
    pub const ALL: [Day; 7] = [Day::M, Day::Tu, Day::W, Day::Th, Day::F, Day::Sa, Day::Su];

    /// Registrar code for this day.
    pub fn code(&self) -> &'static str {
        match self {
            Day::M => "M",
            Day::Tu => "Tu",
            Day::W => "W",
            Day::Th => "Th",
            Day::F => "F",
            Day::Sa => "Sa",
            Day::Su => "Su",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a registrar day code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayError(pub String);

impl fmt::Display for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day code: {:?}", self.0)
    }
}

impl std::error::Error for ParseDayError {}

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Day::M),
            "Tu" => Ok(Day::Tu),
            "W" => Ok(Day::W),
            "Th" => Ok(Day::Th),
            "F" => Ok(Day::F),
            "Sa" => Ok(Day::Sa),
            "Su" => Ok(Day::Su),
            other => Err(ParseDayError(other.to_string())),
        }
    }
}
