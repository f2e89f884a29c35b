//! Report output: the summary sheet, console report and JSON statistics.
//!
//! The summary sheet is written as `.xlsx`, or as CSV when the output path
//! ends in `.csv`.

use anyhow::Result;
use csv::WriterBuilder;
use rust_xlsxwriter::{Format, Workbook};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::{ClassStats, StudentSummary};
use crate::stats::Student;

const SEPARATOR_WIDTH: usize = 40;

/// Writes the summary rows to `path`, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.display(), rows = summaries.len()))]
pub fn write_summaries(path: &Path, summaries: &[StudentSummary]) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        write_csv(path, summaries)?;
    } else {
        write_xlsx(path, summaries)?;
    }

    info!(
        "Student summaries have been successfully exported to {}",
        path.display()
    );
    Ok(())
}

/// Writes the summary rows as CSV. The header row is always present.
pub fn write_csv(path: &Path, summaries: &[StudentSummary]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(StudentSummary::HEADERS)?;
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the summary rows to a single `Summary` worksheet.
pub fn write_xlsx(path: &Path, summaries: &[StudentSummary]) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Summary")?;

    for (col, header) in StudentSummary::HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, summary) in summaries.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, summary.name.as_str())?;
        worksheet.write_number(row, 1, summary.total)?;
        worksheet.write_number(row, 2, summary.average)?;
        worksheet.write_string(row, 3, summary.grade.as_str())?;
        worksheet.write_string(row, 4, summary.passed.as_str())?;
    }
    worksheet.autofit();

    debug!(rows = summaries.len(), "Saving workbook");
    workbook.save(path)?;

    Ok(())
}

/// Writes the class statistics as pretty-printed JSON.
pub fn write_stats_json(path: &Path, stats: &ClassStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "Class statistics written");
    Ok(())
}

fn separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Writes the console block for one student.
pub fn write_student_block<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "Student Name: {}", student.name())?;
    writeln!(out, "Total Marks: {}", student.total())?;
    writeln!(out, "Average Marks: {:.2}", student.average())?;
    writeln!(out, "Grade: {}", student.grade())?;
    writeln!(
        out,
        "Passed: {}",
        if student.passed() { "Yes" } else { "No" }
    )?;
    separator(out)
}

/// Writes the console block of class-wide statistics.
pub fn write_class_stats<W: Write>(out: &mut W, stats: &ClassStats) -> io::Result<()> {
    writeln!(out, "Classroom Statistics:")?;
    writeln!(out, "Class Average Marks: {:.2}", stats.class_average)?;
    writeln!(out, "Top Performer: {}", stats.top_performer)?;
    writeln!(out, "Lowest Performer: {}", stats.lowest_performer)?;
    writeln!(out, "Number of Passed Students: {}", stats.passed)?;
    separator(out)
}

/// Prints every student block followed by the class statistics to stdout.
pub fn print_report(students: &[Student], stats: &ClassStats) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for student in students {
        write_student_block(&mut out, student)?;
    }
    write_class_stats(&mut out, stats)?;
    out.flush()
}
