//! Extracted exam entries.

use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, Weekday};

/// One exam occurrence lifted from the exam schedule document.
///
/// `day_of_week` is left unset by extraction and resolved by the
/// availability matcher (from the literal date); `available_doctors` is
/// likewise populated only during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    pub course_name: String,
    /// Original time-cell text, retained for diagnostics.
    pub raw_time: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Literal `DD/MM/YYYY` string, when the cell carried one.
    pub date: Option<String>,
    pub day_of_week: Option<Weekday>,
    pub room: String,
    pub section: String,
    #[serde(default)]
    pub available_doctors: Vec<String>,
}
