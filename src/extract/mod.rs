//! Schedule extraction: header location, time/day parsing, and the two
//! document extractors built on top of them.

pub mod bidi;
pub mod exams;
pub mod header;
pub mod roster;
pub mod timeslot;

pub use exams::{parse_exams, UNKNOWN_COURSE};
pub use header::{locate_header, ColumnMap, FieldKeywords, LocatedHeader};
pub use roster::{parse_roster, UNKNOWN_DOCTOR};
pub use timeslot::{parse_time_slots, HourConvention};
