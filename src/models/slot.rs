//! A single parsed time/day/date slot.

use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, Weekday};

/// One normalized schedule slot recovered from a document cell.
///
/// Emitted only when at least one of `days` / `date` is present; a cell line
/// that yields neither produces no slot at all. `start == end` marks a
/// degenerate slot where only one time token was recoverable, kept for
/// diagnostics but useless for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Deduplicated; set semantics, no ordering guarantee.
    pub days: Vec<Weekday>,
    /// Literal `DD/MM/YYYY` string as it appeared in the cell.
    pub date: Option<String>,
}

impl ScheduleSlot {
    /// Add a day unless it is already present.
    pub fn push_day(&mut self, day: Weekday) {
        if !self.days.contains(&day) {
            self.days.push(day);
        }
    }

    /// True when only a single time token was recovered.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
