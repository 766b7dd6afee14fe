#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use typed_builder::TypedBuilder;

use crate::grade::GradeError;

/// Something that can hand over a class's scores, in order.
pub trait ScoreSource {
    /// Reads every score this source has. Fails with
    /// [`GradeError::InvalidInput`] when the scores are missing or malformed.
    fn read_scores(&mut self) -> Result<Vec<i32>, GradeError>;
}

/// Bounds applied while reading scores from a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct ScoreLimits {
    /// Largest number of students accepted before any storage is reserved.
    #[builder(default = 10_000)]
    pub max_students:  usize,
    /// Scores below this are accepted but logged.
    #[builder(default = 0)]
    pub score_floor:   i32,
    /// Scores above this are accepted but logged.
    #[builder(default = 100)]
    pub score_ceiling: i32,
}

impl Default for ScoreLimits {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScoreLimits {
    /// Whether `score` lies within `[score_floor, score_ceiling]`.
    pub fn in_band(&self, score: i32) -> bool {
        (self.score_floor..=self.score_ceiling).contains(&score)
    }

    /// Logs a warning when `score` (belonging to the 1-based `student`) is
    /// out of band. The score is still accepted either way.
    pub fn check(&self, student: usize, score: i32) -> bool {
        let in_band = self.in_band(score);
        if !in_band {
            tracing::warn!(
                "Score {score} for student {student} is outside {}..={}",
                self.score_floor,
                self.score_ceiling
            );
        }
        in_band
    }

    /// Runs [`ScoreLimits::check`] over every score and returns how many
    /// were out of band.
    pub fn check_all(&self, scores: &[i32]) -> usize {
        scores
            .iter()
            .enumerate()
            .filter(|(i, score)| !self.check(i + 1, **score))
            .count()
    }
}

/// Scores that are already in memory, eg. given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    /// Scores still to be handed over.
    scores: Vec<i32>,
    /// Score band checked on hand-over.
    limits: ScoreLimits,
}

impl ListSource {
    /// Creates a source over the given scores, checked against the default
    /// band.
    pub fn new(scores: impl IntoIterator<Item = i32>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
            limits: ScoreLimits::default(),
        }
    }

    /// Replaces the band the scores are checked against.
    pub fn with_limits(mut self, limits: ScoreLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl ScoreSource for ListSource {
    fn read_scores(&mut self) -> Result<Vec<i32>, GradeError> {
        if self.scores.is_empty() {
            return Err(GradeError::invalid("no scores were given"));
        }
        self.limits.check_all(&self.scores);
        Ok(std::mem::take(&mut self.scores))
    }
}

/// Reads a count followed by that many scores as whitespace-separated tokens,
/// the way a console scanner would. Tokens may be split across lines in any
/// way.
pub struct TokenSource<R, W> {
    /// Underlying line reader.
    reader:  R,
    /// Where prompts go, if prompting is enabled.
    prompt:  Option<W>,
    /// Tokens read but not yet consumed.
    pending: VecDeque<String>,
    /// Count and score bounds.
    limits:  ScoreLimits,
}

impl<R: BufRead, W: Write> TokenSource<R, W> {
    /// Creates a token source.
    ///
    /// * `reader`: where tokens come from
    /// * `prompt`: where to print prompts, `None` to read silently
    /// * `limits`: count and score bounds
    pub fn new(reader: R, prompt: Option<W>, limits: ScoreLimits) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
            limits,
        }
    }

    /// Writes `text` to the prompt writer, if there is one.
    fn ask(&mut self, text: &str) -> Result<(), GradeError> {
        if let Some(out) = self.prompt.as_mut() {
            write!(out, "{text}")
                .and_then(|_| out.flush())
                .map_err(|e| GradeError::invalid(format!("could not write prompt: {e}")))?;
        }
        Ok(())
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    fn next_token(&mut self) -> Result<Option<String>, GradeError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| GradeError::invalid(format!("could not read input: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads and validates the number of students.
    fn read_count(&mut self) -> Result<usize, GradeError> {
        self.ask("Enter number of students: ")?;
        let token = self
            .next_token()?
            .ok_or_else(|| GradeError::invalid("input ended before the number of students"))?;
        let count = token.parse::<i64>().map_err(|_| {
            GradeError::invalid(format!("`{token}` is not a valid number of students"))
        })?;

        if count <= 0 {
            return Err(GradeError::invalid(format!(
                "the number of students must be positive, got {count}"
            )));
        }
        let count = usize::try_from(count)
            .ok()
            .filter(|count| *count <= self.limits.max_students)
            .ok_or_else(|| {
                GradeError::invalid(format!(
                    "at most {} students are supported, got {count}",
                    self.limits.max_students
                ))
            })?;

        tracing::debug!(count, "Read number of students");
        Ok(count)
    }
}

impl<R: BufRead, W: Write> ScoreSource for TokenSource<R, W> {
    fn read_scores(&mut self) -> Result<Vec<i32>, GradeError> {
        let count = self.read_count()?;
        let mut scores = Vec::with_capacity(count);

        for student in 1..=count {
            self.ask(&format!("Student {student} marks: "))?;
            let token = self.next_token()?.ok_or_else(|| {
                GradeError::invalid(format!(
                    "expected {count} scores but input ended after {}",
                    student - 1
                ))
            })?;
            let score = token.parse::<i32>().map_err(|_| {
                GradeError::invalid(format!("`{token}` is not a valid score for student {student}"))
            })?;

            self.limits.check(student, score);
            scores.push(score);
        }

        Ok(scores)
    }
}
