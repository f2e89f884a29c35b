//! Data types produced by the evaluation and aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::analyzers::grade::Grade;

/// Pass/fail verdict as it appears in the summary sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassStatus {
    Yes,
    No,
}

impl From<bool> for PassStatus {
    fn from(passed: bool) -> Self {
        if passed { PassStatus::Yes } else { PassStatus::No }
    }
}

impl PassStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PassStatus::Yes => "Yes",
            PassStatus::No => "No",
        }
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row of the summary sheet.
///
/// Field order is the column order of the written report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    #[serde(rename = "Student Name")]
    pub name: String,
    #[serde(rename = "Total Marks")]
    pub total: f64,
    #[serde(rename = "Average Marks")]
    pub average: f64,
    #[serde(rename = "Grade")]
    pub grade: Grade,
    #[serde(rename = "Passed")]
    pub passed: PassStatus,
}

impl StudentSummary {
    /// Header row of the summary sheet.
    pub const HEADERS: [&'static str; 5] = [
        "Student Name",
        "Total Marks",
        "Average Marks",
        "Grade",
        "Passed",
    ];
}

/// Class-wide statistics for one run.
#[derive(Debug, Clone, Serialize)]
pub struct ClassStats {
    pub generated_at: DateTime<Utc>,
    pub student_count: usize,
    pub class_average: f64,
    pub average_stddev: f64,
    pub top_performer: String,
    pub lowest_performer: String,
    pub passed: usize,
    pub failed: usize,
    pub grade_distribution: BTreeMap<Grade, usize>,
}
