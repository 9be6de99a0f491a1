//! Muraqib: schedule extraction and invigilation availability for
//! mixed-script (Arabic/English) university documents.
//!
//! Two documents come in through the [`document`] boundary: a lecturer
//! roster (pages of text plus a busy-time table each) and an exam schedule
//! (tables of exam rows). The [`extract`] modules recover normalized
//! time/day slots from their direction-unreliable cells, [`matching`]
//! resolves which lecturers are free for each exam and where the free gaps
//! in a working day fall, and [`api::process`] assembles the combined
//! payload the embedding service serializes.

pub mod api;
pub mod config;
pub mod document;
pub mod extract;
pub mod matching;
pub mod models;

pub use api::{process, ParseOutcome};
pub use document::{DocumentError, ExamDocument, Grid, RosterDocument, RosterPage};
pub use extract::{parse_exams, parse_roster, HourConvention};
pub use matching::{free_time, match_exams, IntervalRecord};
pub use models::{
    BusySet, DoctorRecord, DoctorRegistry, ExamEntry, ScheduleSlot, TimeOfDay, Weekday,
};

use tracing_subscriber::EnvFilter;

/// Install the default tracing subscriber. The embedding layer calls this
/// once at startup; `RUST_LOG` overrides the built-in filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
