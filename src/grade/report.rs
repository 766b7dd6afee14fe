#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use super::letter::LetterGrade;

/// Summary of one run's scores. Only [`super::stats::compute`] builds one, so
/// `count == scores.len()` and `minimum <= average <= maximum` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Number of scores summarised.
    pub(crate) count:   usize,
    /// Scores in the order they were supplied.
    pub(crate) scores:  Vec<i32>,
    /// Sum of all scores.
    pub(crate) total:   i64,
    /// `total / count`, without truncation.
    pub(crate) average: f64,
    /// Greatest score.
    pub(crate) maximum: i32,
    /// Least score.
    pub(crate) minimum: i32,
    /// Grade the average falls into.
    pub(crate) grade:   LetterGrade,
}

impl GradeReport {
    /// Returns the number of scores.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the scores in supply order.
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Returns the sum of all scores.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Returns the arithmetic mean.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Returns the highest score.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Returns the lowest score.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Returns the letter grade of the average.
    pub fn grade(&self) -> LetterGrade {
        self.grade
    }
}

impl Display for GradeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} scores, total {}, average {:.2}, high {}, low {}, grade {}",
            self.count, self.total, self.average, self.maximum, self.minimum, self.grade
        )
    }
}
