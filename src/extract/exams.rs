//! Exam schedule extraction.

use super::header::{locate_header, ColumnMap, FieldKeywords};
use super::timeslot::{parse_time_slots, HourConvention};
use crate::document::{DocumentError, ExamDocument};
use crate::models::ExamEntry;

/// Sentinel for rows whose table mapped no course-name column.
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Time cells shorter than this are stray whitespace, not real entries.
const MIN_TIME_CELL_CHARS: usize = 3;

fn exam_header_required(cols: &ColumnMap) -> bool {
    cols.time.is_some() && (cols.course_name.is_some() || cols.days.is_some())
}

/// Extract exam entries from every recognizable table of the exam document.
///
/// `day_of_week` is left unset on every entry; the availability matcher
/// resolves it from the literal date. Tables without a qualifying header and
/// structurally short rows are skipped; a time cell spanning several lines
/// emits one entry per parsed slot.
pub fn parse_exams(doc: &dyn ExamDocument) -> Result<Vec<ExamEntry>, DocumentError> {
    let mut entries = Vec::new();

    for (table_no, table) in doc.tables()?.iter().enumerate() {
        let Some(header) = locate_header(table, &FieldKeywords::exam(), exam_header_required)
        else {
            tracing::debug!(table = table_no, "no header row in exam table, skipping");
            continue;
        };

        for row in &table[header.row + 1..] {
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let Some(cells) = RowCells::gather(row, &header.columns) else {
                continue; // structural row error
            };
            if cells.time.chars().count() < MIN_TIME_CELL_CHARS {
                continue;
            }

            for slot in parse_time_slots(cells.time, cells.days, HourConvention::ExamTwelveHour)
            {
                entries.push(ExamEntry {
                    course_name: cells.course.to_string(),
                    raw_time: cells.time.to_string(),
                    start: slot.start,
                    end: slot.end,
                    date: slot.date,
                    day_of_week: None,
                    room: cells.room.to_string(),
                    section: cells.section.to_string(),
                    available_doctors: Vec::new(),
                });
            }
        }
    }

    tracing::info!(entries = entries.len(), "exam schedule parsed");
    Ok(entries)
}

/// The mapped cells of one exam row. `gather` fails (structural row error)
/// when a mapped column falls beyond the row's width.
struct RowCells<'a> {
    course: &'a str,
    time: &'a str,
    days: &'a str,
    room: &'a str,
    section: &'a str,
}

impl<'a> RowCells<'a> {
    fn gather(row: &'a [String], columns: &ColumnMap) -> Option<Self> {
        Some(Self {
            course: cell(row, columns.course_name, UNKNOWN_COURSE)?,
            time: cell(row, columns.time, "")?,
            days: cell(row, columns.days, "")?,
            room: cell(row, columns.room, "")?,
            section: cell(row, columns.section, "")?,
        })
    }
}

/// An unmapped column yields the default; a mapped column missing from this
/// row yields `None`.
fn cell<'a>(row: &'a [String], idx: Option<usize>, default: &'a str) -> Option<&'a str> {
    match idx {
        None => Some(default),
        Some(i) => row.get(i).map(|s| s.as_str()),
    }
}
