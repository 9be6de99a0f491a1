//! Time/day token parsing for schedule cells.
//!
//! Cells arrive as free text whose direction is unreliable: `"13:00_14:30 ,
//! ث"` and its fully mirrored counterpart describe the same slot. The parser
//! therefore never trusts positional order: times are recovered by numeric
//! ordering, days by testing every token in both directions. Each
//! newline-delimited line of a cell is an independent sub-entry.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use super::bidi;
use crate::models::{ScheduleSlot, TimeOfDay, Weekday};

/// Exam sheets write times in 12-hour notation with no AM/PM marker; hours in
/// this range are read as PM. A genuine morning exam at these hours would be
/// shifted; accepted limitation of the source format.
const PM_INFERENCE_HOURS: RangeInclusive<u16> = 1..=6;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("valid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{4}").expect("valid regex"));

/// Which clock notation a document uses for its time cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourConvention {
    /// Exam schedule: 12-hour notation, PM inferred for small hours.
    ExamTwelveHour,
    /// Lecturer roster: already 24-hour, hours used as-is.
    RosterTwentyFourHour,
}

impl HourConvention {
    fn adjust_hour(self, hour: u16) -> u16 {
        match self {
            Self::ExamTwelveHour if PM_INFERENCE_HOURS.contains(&hour) => hour + 12,
            _ => hour,
        }
    }
}

/// Parse a raw time cell into normalized slots.
///
/// The cell may hold several newline-separated sub-entries; each line is
/// parsed independently against the shared `day_fallback` (typically the
/// row's day cell). Lines that yield no time token, or neither a day nor a
/// date, produce nothing.
pub fn parse_time_slots(
    cell: &str,
    day_fallback: &str,
    convention: HourConvention,
) -> Vec<ScheduleSlot> {
    cell.lines()
        .filter_map(|line| parse_line(line, day_fallback, convention))
        .collect()
}

fn parse_line(line: &str, day_fallback: &str, convention: HourConvention) -> Option<ScheduleSlot> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // One working buffer: the line plus the fallback day text, with the
    // separator variants the documents use collapsed to a plain hyphen.
    let mut buffer = line.to_string();
    let fallback = day_fallback.trim();
    if !fallback.is_empty() {
        buffer.push(' ');
        buffer.push_str(fallback);
    }
    let buffer = buffer.replace('_', "-").replace('\u{2013}', "-");

    // Times by numeric order, not text position: the minimum is the start
    // regardless of which direction the range was written in.
    let mut times = extract_times(&buffer, convention);
    if times.is_empty() {
        return None;
    }
    times.sort();
    let start = times[0];
    let end = times[times.len() - 1];

    let date = DATE_RE.find(&buffer).map(|m| m.as_str().to_string());

    let mut days = extract_days(&buffer);
    if days.is_empty() && date.is_none() {
        days = english_days(&buffer);
    }
    if days.is_empty() && date.is_none() {
        return None;
    }

    Some(ScheduleSlot {
        start,
        end,
        days,
        date,
    })
}

fn extract_times(buffer: &str, convention: HourConvention) -> Vec<TimeOfDay> {
    let mut times = Vec::new();
    for cap in TIME_RE.captures_iter(buffer) {
        let (Ok(hour), Ok(minute)) = (cap[1].parse::<u16>(), cap[2].parse::<u16>()) else {
            continue;
        };
        let Some(time) = TimeOfDay::from_hm(convention.adjust_hour(hour), minute) else {
            continue;
        };
        times.push(time);
    }
    times
}

/// Single-letter Arabic weekday codes, as used in roster day cells.
fn letter_day(token: &str) -> Option<Weekday> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match c {
            'ح' => Some(Weekday::Sun),
            'ن' => Some(Weekday::Mon),
            'ث' => Some(Weekday::Tue),
            'ر' => Some(Weekday::Wed),
            'خ' => Some(Weekday::Thu),
            _ => None,
        },
        _ => None,
    }
}

/// Full Arabic weekday names, spelling variants included.
const FULL_NAMES: [(Weekday, &[&str]); 5] = [
    (Weekday::Sun, &["الأحد"]),
    (Weekday::Mon, &["الاثنين", "الأثنين"]),
    (Weekday::Tue, &["الثلاثاء"]),
    (Weekday::Wed, &["الأربعاء", "الاربعاء"]),
    (Weekday::Thu, &["الخميس"]),
];

/// Pull Arabic weekdays out of the working buffer.
///
/// Parentheses and commas become whitespace, then every token is normalized
/// and tested in both directions against full names and single-letter codes.
/// Hyphenated tokens (concatenated day ranges such as "ر-ن") are split and
/// each fragment re-tested.
fn extract_days(buffer: &str) -> Vec<Weekday> {
    let cleaned = buffer.replace(['(', ')', ','], " ");
    let mut days = Vec::new();
    for token in cleaned.split_whitespace() {
        let norm = bidi::normalize(token);
        scan_token(&norm, &mut days);
        if norm.contains('-') {
            for fragment in norm.split('-') {
                scan_token(fragment.trim(), &mut days);
            }
        }
    }
    days
}

fn scan_token(token: &str, days: &mut Vec<Weekday>) {
    if token.is_empty() {
        return;
    }
    for reading in bidi::readings(token) {
        for (day, names) in FULL_NAMES {
            if names.iter().any(|name| reading.contains(name)) {
                push_unique(days, day);
            }
        }
        if let Some(day) = letter_day(&reading) {
            push_unique(days, day);
        }
    }
}

/// English names, case-insensitive substring match over the whole buffer.
/// Last resort: consulted only when no Arabic day and no date was found.
fn english_days(buffer: &str) -> Vec<Weekday> {
    let lower = buffer.to_lowercase();
    let mut days = Vec::new();
    for (needle, day) in [
        ("sun", Weekday::Sun),
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("thu", Weekday::Thu),
    ] {
        if lower.contains(needle) {
            push_unique(&mut days, day);
        }
    }
    days
}

fn push_unique(days: &mut Vec<Weekday>, day: Weekday) {
    if !days.contains(&day) {
        days.push(day);
    }
}
