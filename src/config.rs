#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{str::FromStr, sync::OnceLock};

use tracing::Level;

use crate::{input::ScoreLimits, render::ReportFormat};

/// Defaults read from the environment (and `.env`, once `main` has loaded
/// it).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Report format used when `--format` is not given.
    format:        ReportFormat,
    /// Largest class size accepted from a console.
    max_students:  usize,
    /// Lowest score not worth a warning.
    score_floor:   i32,
    /// Highest score not worth a warning.
    score_ceiling: i32,
    /// Most verbose level logged to stderr.
    log_level:     Level,
    /// Problems found while reading the environment, logged by the caller
    /// once a subscriber is installed.
    warnings:      Vec<String>,
}

impl ConfigState {
    /// Builds the configuration from the process environment.
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to
    /// its value. Unset or unparsable variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ScoreLimits::default();
        let mut warnings = Vec::new();
        let mut score_floor = read_var(
            &lookup,
            &mut warnings,
            "MARKSHEET_SCORE_FLOOR",
            defaults.score_floor,
        );
        let mut score_ceiling = read_var(
            &lookup,
            &mut warnings,
            "MARKSHEET_SCORE_CEILING",
            defaults.score_ceiling,
        );
        if score_floor > score_ceiling {
            warnings.push(format!(
                "Ignoring score band {score_floor}..={score_ceiling}: floor is above ceiling"
            ));
            score_floor = defaults.score_floor;
            score_ceiling = defaults.score_ceiling;
        }

        Self {
            format: read_var(&lookup, &mut warnings, "MARKSHEET_FORMAT", ReportFormat::default()),
            max_students: read_var(
                &lookup,
                &mut warnings,
                "MARKSHEET_MAX_STUDENTS",
                defaults.max_students,
            ),
            score_floor,
            score_ceiling,
            log_level: read_var(&lookup, &mut warnings, "MARKSHEET_LOG", Level::WARN),
            warnings,
        }
    }

    /// Returns the default report format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Returns the largest accepted class size.
    pub fn max_students(&self) -> usize {
        self.max_students
    }

    /// Returns the log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the problems found while reading the environment. Each one
    /// fell back to a default.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns the count and score bounds for console input.
    pub fn score_limits(&self) -> ScoreLimits {
        ScoreLimits::builder()
            .max_students(self.max_students)
            .score_floor(self.score_floor)
            .score_ceiling(self.score_ceiling)
            .build()
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Global storage for the lazily constructed configuration.
static CONFIG: OnceLock<ConfigState> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> &'static ConfigState {
    CONFIG.get_or_init(ConfigState::from_env)
}

/// Parses variable `name` through `lookup`, falling back to `default` (and
/// noting it in `warnings`) when it does not parse.
fn read_var<T, F>(lookup: &F, warnings: &mut Vec<String>, name: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            warnings.push(format!("Ignoring {name}={value}: could not parse it"));
            default
        }),
        None => default,
    }
}
