#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The error type shared by score sources and the statistics engine.
pub mod error;
/// Letter grades and the average thresholds behind them.
pub mod letter;
/// The summary value produced for one set of scores.
pub mod report;
/// Total, average, extremes and grade of a set of scores.
pub mod stats;

pub use error::GradeError;
pub use letter::LetterGrade;
pub use report::GradeReport;
pub use stats::{compute, compute_counted};
