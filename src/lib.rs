//! # marksheet
//!
//! Summarises a class's marks: total, average, highest and lowest, plus the
//! letter grade the average falls into.
//!
//! Scores come from a [`input::ScoreSource`], are summarised by
//! [`grade::compute`] and handed to a [`render::ReportSink`].

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Defaults read from the environment
pub mod config;
/// For all things related to grading
pub mod grade;
/// Where scores come from
pub mod input;
/// Where reports go
pub mod render;

use anyhow::Result;
use grade::GradeReport;
use input::ScoreSource;
use render::ReportSink;

/// Reads scores from `source`, summarises them and emits the report to
/// `sink`. Returns the report that was emitted.
pub fn run(source: &mut dyn ScoreSource, sink: &mut dyn ReportSink) -> Result<GradeReport> {
    let scores = source.read_scores()?;
    let report = grade::compute(scores)?;
    sink.emit(&report)?;
    Ok(report)
}
