//! Student mark-sheet loader.
//!
//! Reads the first worksheet of a workbook (anything `calamine` opens:
//! `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) or a `.csv` file, and turns
//! every non-blank data row into a [`Student`].

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::stats::Student;

/// A cell value before it is interpreted as a name or a mark.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Number(f64),
    Text(String),
    /// Dates, durations and error cells: shown as text, never a mark.
    Other(String),
    Blank,
}

impl RawCell {
    fn from_field(field: &str) -> Self {
        if field.trim().is_empty() {
            RawCell::Blank
        } else {
            RawCell::Text(field.to_string())
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, RawCell::Blank)
    }

    /// Numeric value of the cell, coerced to 0 when it is not a number.
    pub fn to_mark(&self) -> f64 {
        match self {
            RawCell::Number(n) if n.is_finite() => *n,
            RawCell::Number(_) | RawCell::Other(_) | RawCell::Blank => 0.0,
            RawCell::Text(text) => coerce_mark(text),
        }
    }

    pub fn to_name(&self) -> String {
        match self {
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(text) | RawCell::Other(text) => text.clone(),
            RawCell::Blank => String::new(),
        }
    }
}

impl From<&Data> for RawCell {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Float(f) => RawCell::Number(*f),
            Data::Int(i) => RawCell::Number(*i as f64),
            Data::Bool(b) => RawCell::Number(if *b { 1.0 } else { 0.0 }),
            Data::String(s) => RawCell::from_field(s),
            Data::Empty => RawCell::Blank,
            Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) | Data::Error(_) => {
                RawCell::Other(cell.to_string())
            }
        }
    }
}

/// Parses a textual mark. Anything that is not a finite number becomes 0.
pub fn coerce_mark(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(cell = text, "Non-numeric mark coerced to 0");
            0.0
        }
    }
}

/// A header row plus data rows, with cells positioned by absolute column.
#[derive(Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl Table {
    /// Converts each non-blank row into a student.
    ///
    /// # Errors
    ///
    /// Fails when the name column is missing or no column is left for marks.
    pub fn into_students(self, config: &LoaderConfig) -> Result<Vec<Student>, LoadError> {
        let name_idx = self
            .headers
            .iter()
            .position(|h| *h == config.name_column)
            .ok_or_else(|| LoadError::MissingColumn {
                column: config.name_column.clone(),
            })?;

        let width = self.headers.len();
        if width <= config.mark_start {
            return Err(LoadError::NoSubjectColumns {
                found: width,
                mark_start: config.mark_start,
            });
        }

        let mut students = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            if row.iter().all(RawCell::is_blank) {
                continue;
            }

            let name = row.get(name_idx).map(RawCell::to_name).unwrap_or_default();
            let marks = (config.mark_start..width)
                .map(|i| row.get(i).map_or(0.0, RawCell::to_mark))
                .collect();

            students.push(Student::new(name, marks)?);
        }

        Ok(students)
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Reads the first worksheet of a workbook.
pub fn read_workbook(path: &Path) -> Result<Table, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;
    debug!(sheet = %sheet, "Reading worksheet");

    let range = workbook.worksheet_range(&sheet)?;
    // The range covers only the used cells; pad back to column A.
    let col_offset = range.start().map_or(0, |(_, col)| col as usize);

    let mut rows = range.rows().map(|row| {
        std::iter::repeat_n(RawCell::Blank, col_offset)
            .chain(row.iter().map(RawCell::from))
            .collect::<Vec<_>>()
    });

    let headers = rows
        .next()
        .map(|row| row.iter().map(RawCell::to_name).collect())
        .unwrap_or_default();

    Ok(Table {
        headers,
        rows: rows.collect(),
    })
}

/// Reads a CSV file whose first record is the header row.
pub fn read_csv(path: &Path) -> Result<Table, LoadError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(RawCell::from_field).collect());
    }

    Ok(Table { headers, rows })
}

/// Loads student records from a mark sheet.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when `path` does not exist, and a read or
/// schema error for anything else that stops the file being interpreted.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_students(path: &Path, config: &LoaderConfig) -> Result<Vec<Student>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let table = if is_csv(path) {
        read_csv(path)?
    } else {
        read_workbook(path)?
    };
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "Input table read"
    );

    let students = table.into_students(config)?;
    if students.is_empty() {
        warn!("Input contains no student rows");
    } else {
        info!(students = students.len(), "Student records loaded");
    }
    Ok(students)
}

/// Loads student records, logging any failure and returning an empty list.
pub fn load_student_data(path: &Path, config: &LoaderConfig) -> Vec<Student> {
    match load_students(path, config) {
        Ok(students) => students,
        Err(e) if e.is_not_found() => {
            error!("Error: {e}");
            Vec::new()
        }
        Err(e) => {
            error!(error = %e, "Error reading the input file");
            Vec::new()
        }
    }
}
