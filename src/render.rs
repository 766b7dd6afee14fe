#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, io::Write, str::FromStr};

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::grade::{GradeReport, LetterGrade};

/// Title printed above every human-readable report.
pub const REPORT_TITLE: &str = "Analysis Report";

/// Closing line of the table report.
pub const REPORT_FOOTER: &str = "Keep working hard! Success = Effort";

/// Row label of the overall grade.
const GRADE_METRIC: &str = "Overall Grade";

/// How a report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// A boxed table.
    #[default]
    Table,
    /// Aligned `label : value` lines.
    Plain,
    /// A pretty-printed JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "plain" | "text" => Ok(ReportFormat::Plain),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format `{other}`, expected table, plain or json")),
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportFormat::Table => "table",
            ReportFormat::Plain => "plain",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Options shared by all sinks.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RenderOptions {
    /// Which sink to use.
    #[builder(default)]
    pub format:      ReportFormat,
    /// Colour the grade in plain reports.
    #[builder(default = true)]
    pub color:       bool,
    /// Also list the individual scores.
    #[builder(default = false)]
    pub show_scores: bool,
}

/// Receives a finished report and presents it.
pub trait ReportSink {
    /// Renders `report` to the sink's output.
    fn emit(&mut self, report: &GradeReport) -> Result<()>;
}

#[derive(Tabled)]
/// One line of a human-readable report.
struct MetricRow {
    #[tabled(rename = "Metric")]
    /// * `metric`: what the value measures
    metric: &'static str,
    #[tabled(rename = "Value")]
    /// * `value`: the formatted value
    value:  String,
}

/// Formats `grade` as `label (remark)`.
fn grade_text(grade: LetterGrade) -> String {
    format!("{} ({})", grade.label(), grade.remark())
}

/// Builds the rows shared by the table and plain sinks.
fn metric_rows(report: &GradeReport, show_scores: bool) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow {
            metric: "Total Students",
            value:  report.count().to_string(),
        },
        MetricRow {
            metric: "Total Marks",
            value:  report.total().to_string(),
        },
        MetricRow {
            metric: "Average Marks",
            value:  format!("{:.2}", report.average()),
        },
        MetricRow {
            metric: "Highest Marks",
            value:  report.maximum().to_string(),
        },
        MetricRow {
            metric: "Lowest Marks",
            value:  report.minimum().to_string(),
        },
        MetricRow {
            metric: GRADE_METRIC,
            value:  grade_text(report.grade()),
        },
    ];

    if show_scores {
        rows.push(MetricRow {
            metric: "Scores",
            value:  report.scores().iter().join(", "),
        });
    }

    rows
}

/// Renders reports as a boxed table.
pub struct TableSink<W> {
    /// Destination.
    out:         W,
    /// Whether to add a row listing the scores.
    show_scores: bool,
}

impl<W: Write> TableSink<W> {
    /// Creates a table sink writing to `out`.
    pub fn new(out: W, show_scores: bool) -> Self {
        Self { out, show_scores }
    }
}

impl<W: Write> ReportSink for TableSink<W> {
    fn emit(&mut self, report: &GradeReport) -> Result<()> {
        let table = Table::new(metric_rows(report, self.show_scores))
            .with(Panel::header(REPORT_TITLE))
            .with(Panel::footer(REPORT_FOOTER))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string();

        writeln!(self.out, "{table}").context("Could not write report table")?;
        Ok(())
    }
}

/// Renders reports as aligned `label : value` lines.
pub struct PlainSink<W> {
    /// Destination.
    out:         W,
    /// Whether to colour the grade.
    color:       bool,
    /// Whether to add a line listing the scores.
    show_scores: bool,
}

impl<W: Write> PlainSink<W> {
    /// Creates a plain sink writing to `out`.
    pub fn new(out: W, color: bool, show_scores: bool) -> Self {
        Self {
            out,
            color,
            show_scores,
        }
    }

    /// Colours `text` by how good `grade` is.
    fn paint(&self, grade: LetterGrade, text: String) -> String {
        if !self.color {
            return text;
        }
        match grade {
            LetterGrade::APlus | LetterGrade::A => text.green().bold().to_string(),
            LetterGrade::B | LetterGrade::C => text.yellow().to_string(),
            LetterGrade::D | LetterGrade::F => text.red().to_string(),
        }
    }
}

impl<W: Write> ReportSink for PlainSink<W> {
    fn emit(&mut self, report: &GradeReport) -> Result<()> {
        let rows = metric_rows(report, self.show_scores);
        let width = rows.iter().map(|row| row.metric.len()).max().unwrap_or(0);

        writeln!(self.out, "{REPORT_TITLE}").context("Could not write report")?;
        for row in rows {
            let value = if row.metric == GRADE_METRIC {
                self.paint(report.grade(), row.value)
            } else {
                row.value
            };
            writeln!(self.out, "{:<width$} : {value}", row.metric)
                .context("Could not write report")?;
        }
        Ok(())
    }
}

/// JSON form of a report.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// The report itself.
    #[serde(flatten)]
    report: &'a GradeReport,
    /// Remark for the grade.
    remark: &'static str,
}

/// Renders reports as pretty-printed JSON.
pub struct JsonSink<W> {
    /// Destination.
    out: W,
}

impl<W: Write> JsonSink<W> {
    /// Creates a JSON sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &GradeReport) -> Result<()> {
        let doc = JsonReport {
            report,
            remark: report.grade().remark(),
        };
        serde_json::to_writer_pretty(&mut self.out, &doc).context("Could not serialize report")?;
        writeln!(self.out).context("Could not write report")?;
        Ok(())
    }
}

/// Returns the sink `options` asks for, writing to `out`.
pub fn sink_for<'a, W: Write + 'a>(options: &RenderOptions, out: W) -> Box<dyn ReportSink + 'a> {
    match options.format {
        ReportFormat::Table => Box::new(TableSink::new(out, options.show_scores)),
        ReportFormat::Plain => Box::new(PlainSink::new(out, options.color, options.show_scores)),
        ReportFormat::Json => Box::new(JsonSink::new(out)),
    }
}
