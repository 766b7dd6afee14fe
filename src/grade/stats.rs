#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{error::GradeError, letter::LetterGrade, report::GradeReport};

/// Summarises `scores` into a [`GradeReport`].
///
/// Scores are taken as given, with no clamping to any range. Fails with
/// [`GradeError::InvalidInput`] when `scores` is empty.
pub fn compute(scores: Vec<i32>) -> Result<GradeReport, GradeError> {
    let (&first, rest) = scores
        .split_first()
        .ok_or_else(|| GradeError::invalid("at least one score is required"))?;

    let mut maximum = first;
    let mut minimum = first;
    for &score in rest {
        if score > maximum {
            maximum = score;
        }
        if score < minimum {
            minimum = score;
        }
    }

    let count = scores.len();
    let total: i64 = scores.iter().copied().map(i64::from).sum();
    let average = total as f64 / count as f64;
    let grade = LetterGrade::classify(average);

    tracing::debug!(count, total, average, %grade, "Summarised scores");

    Ok(GradeReport {
        count,
        scores,
        total,
        average,
        maximum,
        minimum,
        grade,
    })
}

/// Like [`compute`], but first checks the scores against the number the
/// caller said to expect.
///
/// * `count`: declared number of scores, must be positive
/// * `scores`: the scores themselves, exactly `count` of them
pub fn compute_counted(count: i64, scores: Vec<i32>) -> Result<GradeReport, GradeError> {
    if count <= 0 {
        return Err(GradeError::invalid(format!(
            "the number of students must be positive, got {count}"
        )));
    }
    if usize::try_from(count).ok() != Some(scores.len()) {
        return Err(GradeError::invalid(format!(
            "expected {count} scores but received {}",
            scores.len()
        )));
    }

    compute(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_are_rejected() {
        let err = compute(Vec::new()).unwrap_err();
        assert!(matches!(err, GradeError::InvalidInput(_)));
    }

    #[test]
    fn single_score_is_its_own_summary() {
        let report = compute(vec![73]).expect("report");
        assert_eq!(report.count(), 1);
        assert_eq!(report.total(), 73);
        assert_eq!(report.average(), 73.0);
        assert_eq!(report.maximum(), 73);
        assert_eq!(report.minimum(), 73);
        assert_eq!(report.grade(), LetterGrade::B);
    }

    #[test]
    fn average_is_not_truncated() {
        let report = compute(vec![90, 89]).expect("report");
        assert_eq!(report.average(), 89.5);
        assert_eq!(report.grade(), LetterGrade::A);
    }

    #[test]
    fn out_of_range_scores_are_kept() {
        let report = compute(vec![-20, 150]).expect("report");
        assert_eq!(report.minimum(), -20);
        assert_eq!(report.maximum(), 150);
        assert_eq!(report.total(), 130);
        assert_eq!(report.grade(), LetterGrade::C);
    }

    #[test]
    fn total_does_not_overflow_i32() {
        let report = compute(vec![i32::MAX, i32::MAX]).expect("report");
        assert_eq!(report.total(), 2 * i64::from(i32::MAX));
        assert_eq!(report.average(), f64::from(i32::MAX));
    }

    #[test]
    fn counted_rejects_non_positive_count() {
        assert!(compute_counted(0, vec![]).is_err());
        assert!(compute_counted(-3, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn counted_rejects_length_mismatch() {
        let err = compute_counted(3, vec![1, 2]).unwrap_err();
        assert_eq!(err.reason(), "expected 3 scores but received 2");
    }

    #[test]
    fn counted_matches_compute() {
        let counted = compute_counted(2, vec![60, 61]).expect("report");
        assert_eq!(counted, compute(vec![60, 61]).expect("report"));
    }
}
