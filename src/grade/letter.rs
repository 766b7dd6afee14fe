#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Letter classification of a class average.
///
/// | Average      | Grade |
/// |--------------|-------|
/// | >= 90        | A+    |
/// | >= 80        | A     |
/// | >= 70        | B     |
/// | >= 60        | C     |
/// | >= 50        | D     |
/// | < 50         | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Average of 90 or more.
    #[serde(rename = "A+")]
    APlus,
    /// Average in `[80, 90)`.
    A,
    /// Average in `[70, 80)`.
    B,
    /// Average in `[60, 70)`.
    C,
    /// Average in `[50, 60)`.
    D,
    /// Anything below 50.
    F,
}

impl LetterGrade {
    /// Lower bounds of each passing grade, highest first.
    pub const THRESHOLDS: [(f64, LetterGrade); 5] = [
        (90.0, LetterGrade::APlus),
        (80.0, LetterGrade::A),
        (70.0, LetterGrade::B),
        (60.0, LetterGrade::C),
        (50.0, LetterGrade::D),
    ];

    /// Maps an average onto its grade; the first threshold the average
    /// reaches wins. `NaN` never reaches a threshold and lands on `F`.
    pub fn classify(average: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(floor, _)| average >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(LetterGrade::F)
    }

    /// The grade label, eg. `A+`.
    pub fn label(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    /// A short remark shown beside the label in reports.
    pub fn remark(self) -> &'static str {
        match self {
            LetterGrade::APlus => "Excellent!",
            LetterGrade::A => "Very Good",
            LetterGrade::B => "Good",
            LetterGrade::C => "Average",
            LetterGrade::D => "Pass",
            LetterGrade::F => "Fail",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
