#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use thiserror::Error;

/// The failure kinds recognised while gathering and summarising scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    /// The scores (or the declared number of them) cannot produce a report.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GradeError {
    /// Shorthand for an `InvalidInput` error with the given reason.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Returns the human-readable reason attached to this error.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput(reason) => reason,
        }
    }
}
