//! The report pipeline: load, print, summarise, write.

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use crate::analyzers::aggregate::Classroom;
use crate::config::LoaderConfig;
use crate::output::{print_report, write_stats_json, write_summaries};
use crate::parser::load_student_data;

/// Runs the whole pipeline for one mark sheet.
///
/// When no students load, nothing is printed or written and the run still
/// succeeds; the loader has already logged why.
///
/// # Errors
///
/// Returns an error if the report or the statistics file cannot be written.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn run(
    input: &Path,
    output: &Path,
    stats_json: Option<&Path>,
    config: &LoaderConfig,
) -> Result<()> {
    let students = load_student_data(input, config);
    if students.is_empty() {
        warn!("No students loaded, nothing to report");
        return Ok(());
    }

    let classroom = Classroom::new(&students);
    let Some(stats) = classroom.stats() else {
        return Ok(());
    };

    print_report(classroom.students(), &stats)?;

    let summaries = classroom.generate_summaries();
    write_summaries(output, &summaries)?;

    if let Some(path) = stats_json {
        write_stats_json(path, &stats)?;
    }

    info!(
        students = stats.student_count,
        passed = stats.passed,
        "Report complete"
    );
    Ok(())
}
