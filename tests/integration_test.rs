//! Integration tests for subnet-analyzer
//!
//! These tests drive the complete workflow from an input sheet to the summary,
//! report and chart files.

use std::fs;
use std::path::Path;
use subnet_analyzer::{
    analyze,
    models::{DuplicatePolicy, InputRow, RecordOrder},
    output::{read_summary, SummaryFormat},
    processing::{analyze_subnets, find_overlaps},
    AnalyzeOptions,
};
use tempfile::tempdir;

fn write_input(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("ip_data.csv");
    fs::write(&path, format!("IP Address,Subnet Mask\n{body}")).unwrap();
    path
}

fn options(dir: &Path, input: std::path::PathBuf) -> AnalyzeOptions {
    AnalyzeOptions {
        input,
        output: dir.join("subnet_report.csv"),
        format: SummaryFormat::Csv,
        write_summary: true,
        report: Some(dir.join("report.md")),
        chart: None,
        policy: DuplicatePolicy::Collapse,
        order: RecordOrder::Text,
        print: false,
    }
}

#[test]
fn test_full_workflow() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "192.168.1.10,255.255.255.0\n192.168.1.20,255.255.255.0\n10.0.0.5,255.0.0.0\n",
    );
    let mut opts = options(dir.path(), input);
    opts.chart = Some(dir.path().join("network_plot.svg"));

    let summary = analyze(&opts).expect("analyze failed");
    assert_eq!(summary.records.len(), 2);
    assert!(summary.skipped.is_empty());

    let written = read_summary(&opts.output).expect("Failed to read summary");
    assert_eq!(written, summary.records);

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.contains("# Analysis Questions"));
    assert!(report.contains("- `10.0.0.0/8` with 16777214 usable hosts"));
    assert!(report.contains("No overlapping subnets found"));

    let chart = fs::metadata(dir.path().join("network_plot.svg")).unwrap();
    assert!(chart.len() > 0);
}

#[test]
fn test_malformed_rows_are_skipped() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "192.168.0.0,24\nbogus,24\n192.168.0.128,255.255.255.128\n10.0.0.0,99\n",
    );
    let mut opts = options(dir.path(), input);
    opts.format = SummaryFormat::Json;
    opts.output = dir.path().join("subnet_report.json");

    let summary = analyze(&opts).expect("analyze failed");
    let skipped: Vec<usize> = summary.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 3]);
    assert_eq!(summary.records.len(), 2);

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.contains("- `192.168.0.0/24` overlaps with `192.168.0.128/25`"));
}

#[test]
fn test_records_follow_column_text_order() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "20.0.0.0,24\n192.168.1.0,24\n10.0.0.0,8\n10.0.0.0,24\n",
    );
    let mut opts = options(dir.path(), input);

    analyze(&opts).expect("analyze failed");
    let csv = fs::read_to_string(&opts.output).unwrap();
    let networks: Vec<String> = csv
        .lines()
        .skip(1)
        .map(|l| l.splitn(3, ',').take(2).collect::<Vec<_>>().join(","))
        .collect();
    assert_eq!(
        networks,
        vec!["10.0.0.0,/24", "10.0.0.0,/8", "192.168.1.0,/24", "20.0.0.0,/24"]
    );

    let report = fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(report.contains("- `10.0.0.0/24` overlaps with `10.0.0.0/8`"));

    opts.order = RecordOrder::Numeric;
    let summary = analyze(&opts).expect("analyze failed");
    let labels: Vec<String> = summary.records.iter().map(|r| r.label()).collect();
    assert_eq!(
        labels,
        vec!["10.0.0.0/8", "10.0.0.0/24", "20.0.0.0/24", "192.168.1.0/24"]
    );
}

#[test]
fn test_invalid_utf8_row_is_skipped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ip_data.csv");
    fs::write(
        &input,
        b"IP Address,Subnet Mask\n10.0.0.0,8\n10.0.\xff.1,24\n192.168.1.0,24\n",
    )
    .unwrap();

    let summary = analyze(&options(dir.path(), input)).expect("analyze failed");
    assert_eq!(summary.records.len(), 2);
    let skipped: Vec<usize> = summary.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1]);
}

#[test]
fn test_workbook_input() {
    let dir = tempdir().unwrap();
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/tests/test_data/ip_data_01.xlsx");

    let summary = analyze(&options(dir.path(), input)).expect("analyze failed");
    let labels: Vec<String> = summary.records.iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["10.0.0.0/8", "172.16.4.0/22", "192.168.1.0/24"]);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].index, 2);
}

#[test]
fn test_empty_input_keeps_columns_and_fails_report() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "not,valid\n");
    let mut opts = options(dir.path(), input);

    // the report has no subnet to name
    assert!(analyze(&opts).is_err());
    let csv = fs::read_to_string(&opts.output).unwrap();
    assert_eq!(csv, "Network,CIDR,Total Addresses,Total Usable Hosts\n");

    opts.report = None;
    let summary = analyze(&opts).expect("analyze without report failed");
    assert!(summary.is_empty());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let opts = options(dir.path(), dir.path().join("missing.xlsx"));
    assert!(analyze(&opts).is_err());
    assert!(!opts.output.exists());
}

#[test]
fn test_core_properties() {
    let rows = vec![
        InputRow::new("192.168.0.0", "255.255.255.0"),
        InputRow::new("192.168.0.128", "255.255.255.128"),
        InputRow::new("10.0.0.0", "255.0.0.0"),
    ];
    let summary = analyze_subnets(&rows, DuplicatePolicy::Collapse, RecordOrder::Text);
    let overlaps = find_overlaps(&summary.networks());
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].first.to_string(), "192.168.0.0/24");
    assert_eq!(overlaps[0].second.to_string(), "192.168.0.128/25");
}
