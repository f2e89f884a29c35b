//! Per-student evaluation: totals, averages, grades and pass/fail.
//!
//! Everything here is derived on demand from a [`Student`]'s marks; nothing
//! is cached on the record.

use crate::analyzers::grade::{Grade, grade};
use crate::analyzers::types::StudentSummary;
use crate::analyzers::utility::mean;
use crate::error::RecordError;

/// Lowest mark (and lowest average) that counts as a pass.
pub const PASS_MARK: f64 = 40.0;

/// Sum of all marks.
pub fn total(marks: &[f64]) -> f64 {
    marks.iter().sum()
}

/// Mean mark, or `None` when there are no marks to divide by.
pub fn average(marks: &[f64]) -> Option<f64> {
    mean(marks)
}

/// A student passes when the average reaches [`PASS_MARK`] and so does every
/// individual mark. An empty mark list never passes.
pub fn passed(marks: &[f64]) -> bool {
    match average(marks) {
        Some(avg) => avg >= PASS_MARK && marks.iter().all(|&m| m >= PASS_MARK),
        None => false,
    }
}

/// One learner's name and ordered subject marks.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    marks: Vec<f64>,
}

impl Student {
    /// Builds a student record. At least one mark is required.
    pub fn new(name: impl Into<String>, marks: Vec<f64>) -> Result<Self, RecordError> {
        let name = name.into();
        if marks.is_empty() {
            return Err(RecordError::NoMarks { name });
        }
        Ok(Self { name, marks })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[f64] {
        &self.marks
    }

    pub fn total(&self) -> f64 {
        total(&self.marks)
    }

    pub fn average(&self) -> f64 {
        // marks is never empty
        self.total() / self.marks.len() as f64
    }

    pub fn grade(&self) -> Grade {
        grade(self.average())
    }

    pub fn passed(&self) -> bool {
        passed(&self.marks)
    }

    /// Builds a fresh summary row for this student.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            name: self.name.clone(),
            total: self.total(),
            average: self.average(),
            grade: self.grade(),
            passed: self.passed().into(),
        }
    }
}
