use std::io::Cursor;

use marksheet::{
    grade::compute,
    input::{ListSource, ScoreLimits, TokenSource},
    render::{
        JsonSink, PlainSink, REPORT_FOOTER, REPORT_TITLE, RenderOptions, ReportFormat, ReportSink,
        TableSink, sink_for,
    },
};
use serde_json::Value;

fn render(sink: &mut dyn ReportSink, scores: Vec<i32>) {
    let report = compute(scores).expect("report");
    sink.emit(&report).expect("emit");
}

#[test]
fn table_lists_every_metric() {
    let mut out = Vec::new();
    render(&mut TableSink::new(&mut out, false), vec![100, 0]);
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains(REPORT_TITLE));
    assert!(text.contains(REPORT_FOOTER));
    for needle in ["Total Students", "Total Marks", "Average Marks", "50.00", "D (Pass)"] {
        assert!(text.contains(needle), "missing {needle} in\n{text}");
    }
    assert!(!text.contains("Scores"));
}

#[test]
fn table_can_list_scores() {
    let mut out = Vec::new();
    render(&mut TableSink::new(&mut out, true), vec![91, 78, 64]);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("91, 78, 64"));
}

#[test]
fn plain_lines_are_aligned() {
    let mut out = Vec::new();
    render(&mut PlainSink::new(&mut out, false, false), vec![90, 90, 90]);
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], REPORT_TITLE);
    assert_eq!(lines[1], "Total Students : 3");
    assert_eq!(lines[2], "Total Marks    : 270");
    assert_eq!(lines[3], "Average Marks  : 90.00");
    assert_eq!(lines[4], "Highest Marks  : 90");
    assert_eq!(lines[5], "Lowest Marks   : 90");
    assert_eq!(lines[6], "Overall Grade  : A+ (Excellent!)");
    assert_eq!(lines.len(), 7);
}

#[test]
fn json_carries_all_fields() {
    let mut out = Vec::new();
    render(&mut JsonSink::new(&mut out), vec![89, 89]);
    let value: Value = serde_json::from_slice(&out).expect("parse json");

    assert_eq!(value["count"], 2);
    assert_eq!(value["scores"], serde_json::json!([89, 89]));
    assert_eq!(value["total"], 178);
    assert_eq!(value["average"], 89.0);
    assert_eq!(value["maximum"], 89);
    assert_eq!(value["minimum"], 89);
    assert_eq!(value["grade"], "A");
    assert_eq!(value["remark"], "Very Good");
}

#[test]
fn sink_for_honours_format() {
    let options = RenderOptions::builder().format(ReportFormat::Json).build();
    let mut out = Vec::new();
    {
        let mut sink = sink_for(&options, &mut out);
        render(sink.as_mut(), vec![49]);
    }
    let value: Value = serde_json::from_slice(&out).expect("parse json");
    assert_eq!(value["grade"], "F");
}

#[test]
fn run_pipes_console_input_to_sink() {
    let mut source = TokenSource::new(
        Cursor::new(b"3\n70\n80\n90\n".to_vec()),
        None::<Vec<u8>>,
        ScoreLimits::default(),
    );
    let mut out = Vec::new();
    let report = {
        let mut sink = PlainSink::new(&mut out, false, true);
        marksheet::run(&mut source, &mut sink).expect("run")
    };

    assert_eq!(report.total(), 240);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Overall Grade  : A (Very Good)"));
    assert!(text.contains("Scores         : 70, 80, 90"));
}

#[test]
fn run_surfaces_invalid_input_without_output() {
    let mut source = ListSource::new(Vec::new());
    let mut out = Vec::new();
    let result = {
        let mut sink = TableSink::new(&mut out, false);
        marksheet::run(&mut source, &mut sink)
    };

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Invalid input"));
    assert!(out.is_empty());
}
