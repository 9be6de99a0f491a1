//! Header-row location for schedule tables.
//!
//! Source tables carry no fixed layout: header rows drift, column order
//! varies between faculties, and header cells surface in either logical or
//! presentation-form text. The locator scans for a row whose cells contain
//! known field keywords and returns a typed column map; tables where no such
//! row satisfies the caller's requirements are skipped entirely rather than
//! guessed at.

/// Recognized schedule-table fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CourseName,
    CourseCode,
    Time,
    Room,
    Days,
    Section,
}

/// Column index per recognized field, `None` where the header row had no
/// matching cell. Field access is checked here instead of going through
/// string-keyed lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub course_name: Option<usize>,
    pub course_code: Option<usize>,
    pub time: Option<usize>,
    pub room: Option<usize>,
    pub days: Option<usize>,
    pub section: Option<usize>,
}

impl ColumnMap {
    fn set(&mut self, field: Field, col: usize) {
        match field {
            Field::CourseName => self.course_name = Some(col),
            Field::CourseCode => self.course_code = Some(col),
            Field::Time => self.time = Some(col),
            Field::Room => self.room = Some(col),
            Field::Days => self.days = Some(col),
            Field::Section => self.section = Some(col),
        }
    }
}

/// A located header row and its column map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedHeader {
    pub row: usize,
    pub columns: ColumnMap,
}

/// Keyword groups used to recognize header cells, one list per field.
///
/// Matching is exact literal substring, deliberately unnormalized: the roster
/// tables surface headers in reversed presentation forms, so those variants
/// are listed verbatim next to the logical-order spellings.
#[derive(Debug, Clone, Copy)]
pub struct FieldKeywords {
    pub course_name: &'static [&'static str],
    pub course_code: &'static [&'static str],
    pub time: &'static [&'static str],
    pub room: &'static [&'static str],
    pub days: &'static [&'static str],
    pub section: &'static [&'static str],
}

impl FieldKeywords {
    /// Keyword table for the exam schedule document.
    pub const fn exam() -> Self {
        Self {
            course_name: &["اسم المقرر", "المادة", "المساق"],
            course_code: &["رمز المقرر", "رقم المادة"],
            time: &["الوقت", "الزمن", "ساعة الامتحان"],
            room: &["القاعة", "المكان", "القاعة/ المختبر"],
            days: &["الأيام", "اليوم", "موعد الامتحان"],
            section: &["الشعبة", "رقم الشعبة"],
        }
    }

    /// Keyword table for the lecturer roster; includes the presentation-form
    /// header spellings the roster PDFs actually produce.
    pub const fn roster() -> Self {
        Self {
            course_name: &[],
            course_code: &[],
            time: &["الوقت", "الزمن", "ﺖﻗﻮﻟﺍ", "ﻦﻣﺰﻟﺍ"],
            room: &[],
            days: &["الأيام", "اليوم", "ﻡﺎﻳﻷﺍ", "ﻡﻮﻴﻟﺍ"],
            section: &[],
        }
    }

    fn groups(&self) -> [(Field, &'static [&'static str]); 6] {
        [
            (Field::CourseName, self.course_name),
            (Field::CourseCode, self.course_code),
            (Field::Time, self.time),
            (Field::Room, self.room),
            (Field::Days, self.days),
            (Field::Section, self.section),
        ]
    }
}

/// Scan a grid top to bottom for the first row whose column map satisfies
/// `required`. Within a row, the first field whose keywords match a cell
/// claims that cell; a later cell matching the same field overrides the
/// recorded column. Returns `None` when no row qualifies; the caller skips
/// the table, no partial extraction is attempted without a header.
pub fn locate_header(
    grid: &[Vec<String>],
    keywords: &FieldKeywords,
    required: impl Fn(&ColumnMap) -> bool,
) -> Option<LocatedHeader> {
    for (row_idx, row) in grid.iter().enumerate() {
        let mut columns = ColumnMap::default();
        for (col_idx, cell) in row.iter().enumerate() {
            for (field, group) in keywords.groups() {
                if group.iter().any(|k| cell.contains(k)) {
                    columns.set(field, col_idx);
                    break;
                }
            }
        }
        if required(&columns) {
            return Some(LocatedHeader {
                row: row_idx,
                columns,
            });
        }
    }
    None
}
