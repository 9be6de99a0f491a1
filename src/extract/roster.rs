//! Lecturer roster extraction.
//!
//! Each roster page carries one lecturer: a header line naming them and a
//! busy-time table. The name line surfaces in either direction (the roster
//! PDFs mirror Arabic text unpredictably), so both readings of every line
//! are checked for the lecturer marker before the name is captured.

use std::sync::LazyLock;

use regex::Regex;

use super::bidi;
use super::header::{locate_header, FieldKeywords};
use super::timeslot::{parse_time_slots, HourConvention};
use crate::document::{DocumentError, RosterDocument};
use crate::models::DoctorRegistry;

/// Sentinel for pages where no lecturer line could be recovered.
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// The lecturer marker ("المحاضر"), searched in both directions.
const LECTURER_MARKER: &str = "المحاضر";

/// Captures the name between the marker and the next delimiter: a colon, the
/// rank keyword "الرتبة", the workload keyword "عبء", or end of line.
static LECTURER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"المحاضر\s*[:\-]?\s*(?P<name>.*?)\s*(?::|الرتبة|عبء|$)")
        .expect("valid regex")
});

/// Everything outside word characters, whitespace and the Arabic block gets
/// stripped from captured names.
static NAME_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\x{0600}-\x{06FF}]").expect("valid regex"));

/// Extract every lecturer's busy-time map from the roster document.
///
/// A name recurring on a later page extends the existing record. Pages
/// without text, a table, or a recognizable header row contribute nothing;
/// structurally short table rows are skipped one at a time.
pub fn parse_roster(doc: &dyn RosterDocument) -> Result<DoctorRegistry, DocumentError> {
    let mut registry = DoctorRegistry::new();

    for (page_no, page) in doc.pages()?.iter().enumerate() {
        if page.text.trim().is_empty() {
            tracing::debug!(page = page_no, "roster page has no text, skipping");
            continue;
        }

        let name = match resolve_lecturer_name(&page.text) {
            Some(raw) => sanitize_name(&raw),
            None => UNKNOWN_DOCTOR.to_string(),
        };
        tracing::info!(page = page_no, lecturer = %name, "roster page resolved");

        let record = registry.get_or_insert(&name);

        let Some(table) = &page.table else {
            tracing::debug!(page = page_no, "roster page has no table");
            continue;
        };
        let Some(header) = locate_header(table, &FieldKeywords::roster(), |c| c.time.is_some())
        else {
            tracing::debug!(page = page_no, "no header row in roster table");
            continue;
        };

        let mut rows_used = 0usize;
        for row in &table[header.row + 1..] {
            let Some(time_cell) = mapped_cell(row, header.columns.time, "") else {
                continue;
            };
            if time_cell.trim().is_empty() {
                continue;
            }
            let Some(day_cell) = mapped_cell(row, header.columns.days, "") else {
                continue;
            };

            for slot in parse_time_slots(time_cell, day_cell, HourConvention::RosterTwentyFourHour)
            {
                for &day in &slot.days {
                    record.busy.add(day, slot.start, slot.end);
                }
            }
            rows_used += 1;
        }
        tracing::debug!(page = page_no, rows = rows_used, "roster table parsed");
    }

    Ok(registry)
}

/// Scan page text for the lecturer line and capture the raw name.
///
/// Lines are normalized (NFKC, tatweel stripped) and checked in both
/// directions; the first hit wins and ends the scan.
fn resolve_lecturer_name(text: &str) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let norm = bidi::normalize(line);
        for reading in bidi::readings(&norm) {
            if !reading.contains(LECTURER_MARKER) {
                continue;
            }
            if let Some(cap) = LECTURER_RE.captures(&reading) {
                return Some(cap["name"].trim().to_string());
            }
        }
    }
    None
}

/// Keep word characters, whitespace and the Arabic block; anything else is
/// extraction noise. An empty survivor falls back to the sentinel.
fn sanitize_name(raw: &str) -> String {
    let clean = NAME_NOISE_RE.replace_all(raw, "");
    let clean = clean.trim();
    if clean.is_empty() {
        UNKNOWN_DOCTOR.to_string()
    } else {
        clean.to_string()
    }
}

/// Cell for a mapped column: `None` column maps to the default, an index
/// beyond the row's width is a structural row error (`None` return).
fn mapped_cell<'a>(row: &'a [String], idx: Option<usize>, default: &'a str) -> Option<&'a str> {
    match idx {
        None => Some(default),
        Some(i) => row.get(i).map(|s| s.as_str()),
    }
}
