//! CLI entry point for the class report generator.
//!
//! Loads a mark sheet, prints a per-student and class-wide report, and
//! writes the summary sheet.

use anyhow::Result;
use class_report::config::{DEFAULT_MARK_START, DEFAULT_NAME_COLUMN, LoaderConfig};
use class_report::report::run;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "class_report")]
#[command(about = "Summarise student marks into grades and class statistics", long_about = None)]
struct Cli {
    /// Spreadsheet (.xlsx, .xls, .ods) or CSV file with student marks
    #[arg(short, long, default_value = "Finalresult.xlsx")]
    input: PathBuf,

    /// Summary file to write (.xlsx, or .csv by extension)
    #[arg(short, long, default_value = "ProcessedResults.xlsx")]
    output: PathBuf,

    /// Header of the column holding student names
    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    name_column: String,

    /// Zero-based index of the first subject-mark column
    #[arg(long, default_value_t = DEFAULT_MARK_START)]
    mark_start: usize,

    /// Optional: also write class statistics as JSON to this path
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/class_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("class_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = LoaderConfig::default()
        .with_name_column(cli.name_column)
        .with_mark_start(cli.mark_start);

    run(&cli.input, &cli.output, cli.stats_json.as_deref(), &config)
}
