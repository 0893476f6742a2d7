use std::fs;
use std::path::PathBuf;

use metric_analyser::app::run_with_config;
use metric_analyser::domain::AnalyserConfig;

const DOWNLOAD: &str = r#"[
    {"metricValue": 12000000, "dtime": "2021-01-01"},
    {"metricValue": 12500000, "dtime": "2021-01-02"},
    {"metricValue": 11000000, "dtime": "2021-01-03"},
    {"metricValue": 500000, "dtime": "2021-01-04"},
    {"metricValue": 12250000, "dtime": "2021-01-05"}
]"#;

const DOWNLOAD_REPORT: &str = "\
SamKnows Metric Analyser v1.0.0
===============================

Period checked:

    From: 2021-01-01
    To:   2021-01-05

Statistics:

    Unit: Megabits per second

    Average: 77.20
    Min: 4.00
    Max: 100.00
    Median: 96.00

Under-performing periods:

    * The period 2021-01-04
      was under-performing.
";

fn config(input_dir: PathBuf, output_dir: PathBuf) -> AnalyserConfig {
    AnalyserConfig {
        input_dir,
        output_dir,
        threads: Some(2),
        print: false,
    }
}

#[test]
fn writes_one_report_per_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    fs::create_dir_all(input.join("archive")).unwrap();
    fs::write(input.join("download.json"), DOWNLOAD).unwrap();
    fs::write(input.join("upload.json"), "[]").unwrap();

    let summary = run_with_config(&config(input, output.clone())).unwrap();
    assert_eq!(summary.datasets, 2);
    assert_eq!(summary.reports, 2);
    assert_eq!(summary.under_performing, 1);

    let download = fs::read_to_string(output.join("download.output")).unwrap();
    assert_eq!(download, DOWNLOAD_REPORT);

    let upload = fs::read_to_string(output.join("upload.output")).unwrap();
    assert!(upload.contains("    From: \n    To:   \n"));
    assert!(upload.contains("    Average: 0.00\n"));
    assert!(!upload.contains("Under-performing"));
}

#[test]
fn malformed_input_fails_with_decode_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("a.json"), DOWNLOAD).unwrap();
    let bad = r#"[{"metricValue": "fast", "dtime": "2021-01-01"}]"#;
    fs::write(input.join("b.json"), bad).unwrap();

    let err = run_with_config(&config(input, output.clone())).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(!output.join("a.output").exists());
}

#[test]
fn missing_input_dir_fails_with_storage_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path().join("nope"), dir.path().join("out"));
    let err = run_with_config(&config).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
