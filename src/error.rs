//! Error types for loading and building student records.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn an input file into student records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("The file {} was not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook has no worksheets: {}", path.display())]
    EmptyWorkbook { path: PathBuf },

    #[error("Required column '{column}' is missing from the header row")]
    MissingColumn { column: String },

    #[error("No subject columns: header has {found} columns, marks start at column {mark_start}")]
    NoSubjectColumns { found: usize, mark_start: usize },

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// A student record that violates its own invariants.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("Student '{name}' has no marks")]
    NoMarks { name: String },
}
