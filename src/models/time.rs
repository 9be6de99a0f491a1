//! Clock times and the five-day academic week.
//!
//! Schedules in the source documents run Sunday through Thursday; Friday and
//! Saturday are outside the academic week and have no representation here.
//! Any datum that resolves to them is treated as "no applicable day".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a full day. `TimeOfDay` values are always below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A clock time as minutes since midnight, range [0, 1440).
///
/// Serializes as `"HH:MM"`, the shape the schedule payload carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct TimeOfDay(u16);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time: {0}")]
pub struct InvalidTime(pub String);

impl TimeOfDay {
    /// Build from an hour/minute pair. `None` when out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build from raw minutes since midnight. `None` when >= 1440.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parse a strict `HH:MM` / `H:MM` string.
    pub fn parse(s: &str) -> Result<Self, InvalidTime> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| InvalidTime(s.to_string()))?;
        let hour: u16 = h.parse().map_err(|_| InvalidTime(s.to_string()))?;
        let minute: u16 = m.parse().map_err(|_| InvalidTime(s.to_string()))?;
        Self::from_hm(hour, minute).ok_or_else(|| InvalidTime(s.to_string()))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidTime;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// A day of the academic week, Sunday through Thursday.
///
/// Ordering follows the week: `Sun < Mon < ... < Thu`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
}

impl Weekday {
    /// All academic weekdays in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
        }
    }

    /// Position within the academic week, 0 (Sun) to 4 (Thu).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a calendar weekday onto the academic week.
    ///
    /// Friday and Saturday fall outside it and yield `None`.
    pub fn from_calendar(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Sun => Some(Weekday::Sun),
            chrono::Weekday::Mon => Some(Weekday::Mon),
            chrono::Weekday::Tue => Some(Weekday::Tue),
            chrono::Weekday::Wed => Some(Weekday::Wed),
            chrono::Weekday::Thu => Some(Weekday::Thu),
            chrono::Weekday::Fri | chrono::Weekday::Sat => None,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
