//! Document-access boundary.
//!
//! The raw extraction primitives (reading a PDF page's text and table,
//! reading a Word table's rows and cells) live outside this crate. The
//! collaborator implements these traits and hands the core plain strings and
//! row/cell grids; anything format-specific stays on its side of the line.

use thiserror::Error;

/// A table as rows of cell strings.
///
/// The collaborator trims whitespace and normalizes missing/`None` cells to
/// empty strings before the grid crosses this boundary. Rows are not
/// guaranteed equal length; the extractors treat a short row as a structural
/// row error and skip it.
pub type Grid = Vec<Vec<String>>;

/// One page of the lecturer roster document.
#[derive(Debug, Clone, Default)]
pub struct RosterPage {
    /// Extractable plain text, empty when the page yields none.
    pub text: String,
    /// The page's busy-time table, when one could be extracted.
    pub table: Option<Grid>,
}

/// The lecturer roster, exposed as a sequence of pages.
pub trait RosterDocument {
    fn pages(&self) -> Result<Vec<RosterPage>, DocumentError>;
}

/// The exam schedule, exposed as a sequence of tables.
pub trait ExamDocument {
    fn tables(&self) -> Result<Vec<Grid>, DocumentError>;
}

/// Failure at the document boundary.
///
/// This is the only condition the core surfaces as a hard error; everything
/// below it (short rows, unparseable cells, missing headers) degrades to
/// skipped data, never to an `Err`.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to open document: {0}")]
    Open(String),

    #[error("failed to read page {page}: {reason}")]
    Page { page: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
