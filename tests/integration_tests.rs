use calamine::{Data, Reader, open_workbook_auto};
use class_report::analyzers::aggregate::Classroom;
use class_report::analyzers::grade::Grade;
use class_report::analyzers::types::{PassStatus, StudentSummary};
use class_report::config::LoaderConfig;
use class_report::output::write_summaries;
use class_report::parser::{load_student_data, load_students};
use class_report::report::run;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

/// Writes a mark sheet laid out like an exam results export.
fn write_mark_sheet(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let headers = ["S.No", "Roll No", "Student Name", "Maths", "Science", "English"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_string(1, 1, "R-01").unwrap();
    sheet.write_string(1, 2, "Alice").unwrap();
    sheet.write_number(1, 3, 70.0).unwrap();
    sheet.write_number(1, 4, 80.0).unwrap();
    sheet.write_number(1, 5, 90.0).unwrap();

    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_string(2, 1, "R-02").unwrap();
    sheet.write_string(2, 2, "Bob").unwrap();
    sheet.write_number(2, 3, 30.0).unwrap();
    sheet.write_number(2, 4, 20.0).unwrap();
    sheet.write_number(2, 5, 10.0).unwrap();

    sheet.write_number(3, 0, 3.0).unwrap();
    sheet.write_string(3, 1, "R-03").unwrap();
    sheet.write_string(3, 2, "Cara").unwrap();
    sheet.write_string(3, 3, "abc").unwrap();
    sheet.write_number(3, 4, 50.0).unwrap();
    // English left blank

    workbook.save(path).unwrap();
}

#[test]
fn test_full_pipeline_xlsx() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Finalresult.xlsx");
    let output = dir.path().join("ProcessedResults.xlsx");
    write_mark_sheet(&input);

    let students = load_students(&input, &LoaderConfig::default()).expect("Failed to load");
    assert_eq!(students.len(), 3);
    assert_eq!(students[2].name(), "Cara");
    assert_eq!(students[2].marks(), &[0.0, 50.0, 0.0]);

    let classroom = Classroom::new(&students);
    assert_eq!(classroom.top_performer().unwrap().name(), "Alice");
    assert_eq!(classroom.lowest_performer().unwrap().name(), "Cara");
    assert_eq!(classroom.count_passed(), 1);

    write_summaries(&output, &classroom.generate_summaries()).unwrap();

    let mut workbook = open_workbook_auto(&output).unwrap();
    let range = workbook.worksheet_range("Summary").unwrap();
    let rows: Vec<_> = range.rows().collect();

    let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
    assert_eq!(header, StudentSummary::HEADERS);
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[1][0], Data::String("Alice".to_string()));
    assert_eq!(rows[1][1], Data::Float(240.0));
    assert_eq!(rows[1][2], Data::Float(80.0));
    assert_eq!(rows[1][3], Data::String("A".to_string()));
    assert_eq!(rows[1][4], Data::String("Yes".to_string()));

    assert_eq!(rows[2][0], Data::String("Bob".to_string()));
    assert_eq!(rows[2][3], Data::String("F".to_string()));
    assert_eq!(rows[2][4], Data::String("No".to_string()));
}

#[test]
fn test_csv_summary_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("marks.csv");
    let output = dir.path().join("summary.csv");
    std::fs::write(
        &input,
        "S.No,Roll No,Student Name,Maths,Science\n\
         1,R-01,Dev,55,61\n\
         2,R-02,Eve,33.3,41\n",
    )
    .unwrap();

    let students = load_students(&input, &LoaderConfig::default()).unwrap();
    let summaries = Classroom::new(&students).generate_summaries();
    write_summaries(&output, &summaries).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let read_back: Vec<StudentSummary> = reader.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(read_back.len(), summaries.len());
    for (written, read) in summaries.iter().zip(&read_back) {
        assert_eq!(read.name, written.name);
        assert!((read.total - written.total).abs() < 1e-9);
        assert!((read.average - written.average).abs() < 1e-9);
        assert_eq!(read.grade, written.grade);
        assert_eq!(read.passed, written.passed);
    }

    assert_eq!(read_back[0].grade, Grade::B);
    assert_eq!(read_back[0].passed, PassStatus::Yes);
    assert_eq!(read_back[1].grade, Grade::D);
    assert_eq!(read_back[1].passed, PassStatus::No);
}

#[test]
fn test_custom_layout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("marks.csv");
    std::fs::write(&input, "Name,Quiz,Exam\nFinn,40,60\n").unwrap();

    let config = LoaderConfig::default()
        .with_name_column("Name")
        .with_mark_start(1);
    let students = load_students(&input, &config).unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].average(), 50.0);
    assert!(students[0].passed());
}

#[test]
fn test_run_with_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does_not_exist.xlsx");
    let output = dir.path().join("ProcessedResults.xlsx");
    let stats = dir.path().join("stats.json");

    assert!(load_student_data(&input, &LoaderConfig::default()).is_empty());
    run(&input, &output, Some(stats.as_path()), &LoaderConfig::default()).unwrap();

    assert!(!output.exists());
    assert!(!stats.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_run_with_header_only_sheet_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("marks.csv");
    let output = dir.path().join("summary.csv");
    std::fs::write(&input, "S.No,Roll No,Student Name,Maths\n").unwrap();

    run(&input, &output, None, &LoaderConfig::default()).unwrap();

    assert!(!output.exists());
}

#[test]
fn test_run_writes_summary_sheet() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Finalresult.xlsx");
    let output = dir.path().join("ProcessedResults.xlsx");
    write_mark_sheet(&input);

    run(&input, &output, None, &LoaderConfig::default()).unwrap();

    let mut workbook = open_workbook_auto(&output).unwrap();
    let range = workbook.worksheet_range("Summary").unwrap();
    let names: Vec<String> = range.rows().skip(1).map(|r| r[0].to_string()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
}

#[test]
fn test_run_writes_stats_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Finalresult.xlsx");
    let output = dir.path().join("summary.csv");
    let stats_path = dir.path().join("stats.json");
    write_mark_sheet(&input);

    run(&input, &output, Some(stats_path.as_path()), &LoaderConfig::default()).unwrap();

    assert!(output.exists());
    let stats: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap()).unwrap();
    assert_eq!(stats["student_count"], 3);
    assert_eq!(stats["top_performer"], "Alice");
    assert_eq!(stats["lowest_performer"], "Cara");
    assert_eq!(stats["passed"], 1);
    assert_eq!(stats["failed"], 2);
}

#[test]
fn test_run_fails_when_output_cannot_be_written() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Finalresult.xlsx");
    let output = dir.path().join("missing_dir").join("summary.csv");
    write_mark_sheet(&input);

    assert!(run(&input, &output, None, &LoaderConfig::default()).is_err());
}
