#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # marksheet
//!
//! Reads a class's marks and prints an analysis report.
//!
//! `marksheet report` asks for the number of students and then each
//! student's marks. Marks can also be passed directly, eg.
//! `marksheet report 72 88 91`.

use std::io::IsTerminal;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use marksheet::{
    config,
    grade::LetterGrade,
    input::{ListSource, ScoreSource, TokenSource},
    render::{self, RenderOptions, ReportFormat},
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Summarise a set of marks
    Report {
        /// Report format, if overridden
        format:      Option<ReportFormat>,
        /// Read without printing prompts
        no_prompt:   bool,
        /// List the individual marks
        show_scores: bool,
        /// Disable colours
        no_color:    bool,
        /// Marks given on the command line
        scores:      Vec<i32>,
    },
    /// Print the grade for an average
    Classify(f64),
}

/// Builds the command line parser
fn options() -> OptionParser<Cmd> {
    let format = long("format")
        .short('f')
        .help("Report format: table, plain or json")
        .argument::<ReportFormat>("FORMAT")
        .optional();
    let no_prompt = long("no-prompt")
        .help("Do not print prompts while reading marks")
        .switch();
    let show_scores = long("show-scores")
        .help("List every mark in the report")
        .switch();
    let no_color = long("no-color").help("Disable coloured output").switch();
    // `any` so negative marks such as `-5` are not taken for flags
    let scores = any::<i32, _, _>("MARKS", Some)
        .help("Marks to summarise; read from standard input when omitted")
        .many();

    let report = construct!(Cmd::Report {
        format,
        no_prompt,
        show_scores,
        no_color,
        scores
    })
    .to_options()
    .command("report")
    .help("Summarise a class's marks");

    let average = positional::<f64>("AVERAGE").help("Average to classify");
    let classify = construct!(Cmd::Classify(average))
        .to_options()
        .command("classify")
        .help("Print the letter grade for an average");

    let cmd = construct!([report, classify]);

    cmd.to_options().descr("Student grade manager")
}

/// Whether to print prompts: only when asked for and a person is typing.
fn prompts_enabled(no_prompt: bool, interactive: bool) -> bool {
    !no_prompt && interactive
}

fn main() -> Result<()> {
    dotenv().ok();
    let config = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    match options().run() {
        Cmd::Report {
            format,
            no_prompt,
            show_scores,
            no_color,
            scores,
        } => {
            let options = RenderOptions::builder()
                .format(format.unwrap_or(config.format()))
                .color(!no_color)
                .show_scores(show_scores)
                .build();
            tracing::debug!(format = %options.format, "Rendering report");

            let mut source: Box<dyn ScoreSource> = if scores.is_empty() {
                let interactive = std::io::stdin().is_terminal();
                let prompt = prompts_enabled(no_prompt, interactive).then(std::io::stdout);
                Box::new(TokenSource::new(std::io::stdin().lock(), prompt, config.score_limits()))
            } else {
                Box::new(ListSource::new(scores).with_limits(config.score_limits()))
            };

            let stdout = std::io::stdout();
            let mut sink = render::sink_for(&options, stdout.lock());
            let report = marksheet::run(source.as_mut(), sink.as_mut())?;
            tracing::info!("{report}");
        }
        Cmd::Classify(average) => {
            let grade = LetterGrade::classify(average);
            println!("{} ({})", grade.label(), grade.remark());
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_scores(args: &[&str]) -> Vec<i32> {
        match options().run_inner(args).expect("parse args") {
            Cmd::Report { scores, .. } => scores,
            other => panic!("expected a report command, got {other:?}"),
        }
    }

    #[test]
    fn negative_marks_are_positional() {
        assert_eq!(report_scores(&["report", "-5", "10"]), vec![-5, 10]);
    }

    #[test]
    fn flags_and_negative_marks_mix() {
        let cmd = options()
            .run_inner(&["report", "--format", "plain", "--no-color", "-5", "10"])
            .expect("parse args");
        match cmd {
            Cmd::Report {
                format,
                no_color,
                scores,
                ..
            } => {
                assert_eq!(format, Some(ReportFormat::Plain));
                assert!(no_color);
                assert_eq!(scores, vec![-5, 10]);
            }
            other => panic!("expected a report command, got {other:?}"),
        }
    }

    #[test]
    fn no_marks_means_read_stdin() {
        assert!(report_scores(&["report", "--no-prompt"]).is_empty());
    }

    #[test]
    fn non_numeric_marks_are_rejected() {
        assert!(options().run_inner(&["report", "ten"]).is_err());
    }

    #[test]
    fn classify_takes_an_average() {
        match options().run_inner(&["classify", "89.5"]).expect("parse args") {
            Cmd::Classify(average) => assert_eq!(average, 89.5),
            other => panic!("expected classify, got {other:?}"),
        }
    }

    #[test]
    fn prompts_need_a_terminal() {
        assert!(prompts_enabled(false, true));
        assert!(!prompts_enabled(false, false));
        assert!(!prompts_enabled(true, true));
    }
}
