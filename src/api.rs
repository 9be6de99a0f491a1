//! Assembled parsing outcome for the calling layer.
//!
//! The embedding service accepts the two uploaded documents, runs the three
//! phases in sequence, and serializes the result as-is; nothing here touches
//! files or the network.

use serde::Serialize;

use crate::document::{DocumentError, ExamDocument, RosterDocument};
use crate::extract::{parse_exams, parse_roster};
use crate::matching::match_exams;
use crate::models::{DoctorRegistry, ExamEntry};

/// The combined payload: extracted doctors, extracted exams (availability
/// unset), and the matched exams (availability set).
#[derive(Debug, Serialize)]
pub struct ParseOutcome {
    pub doctors: DoctorRegistry,
    pub exams: Vec<ExamEntry>,
    pub matches: Vec<ExamEntry>,
}

/// Run extraction over both documents, then matching.
///
/// A document-open failure surfaces as `Err`; everything below that degrades
/// inside the extractors and matcher without failing the request.
pub fn process(
    roster: &dyn RosterDocument,
    exams: &dyn ExamDocument,
) -> Result<ParseOutcome, DocumentError> {
    let doctors = parse_roster(roster)?;
    let exam_entries = parse_exams(exams)?;
    tracing::info!(
        doctors = doctors.len(),
        exams = exam_entries.len(),
        "extraction complete, matching"
    );
    let matches = match_exams(exam_entries.clone(), &doctors);

    Ok(ParseOutcome {
        doctors,
        exams: exam_entries,
        matches,
    })
}
