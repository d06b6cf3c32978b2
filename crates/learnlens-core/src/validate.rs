//! Snapshot contract validation.
//!
//! Malformed-but-well-typed data (empty history, single attempts, zero
//! questions) degrades gracefully inside the engine; genuine contract
//! violations (non-finite scores, impossible answer counts) are rejected
//! here with a typed error before they can reach user-visible fields.

use thiserror::Error;

use crate::model::PerformanceSnapshot;

/// A caller contract violation in the supplied snapshot.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A quiz score outside the 0-100 percentage range.
    #[error("score {score} for topic '{topic}' is outside 0-100")]
    ScoreOutOfRange { topic: String, score: f64 },

    /// A quiz score that is NaN or infinite.
    #[error("score for topic '{topic}' is not a finite number")]
    NonFiniteScore { topic: String },

    /// More correct answers than questions.
    #[error("topic '{topic}' reports {correct} correct answers out of {total} questions")]
    ImpossibleAnswerCount {
        topic: String,
        correct: u32,
        total: u32,
    },

    /// An accuracy trend point outside the 0-100 range.
    #[error("accuracy {accuracy} at trend point {index} is outside 0-100")]
    AccuracyOutOfRange { index: usize, accuracy: f64 },
}

/// Reject snapshots that violate the input contract.
pub fn validate_snapshot(snapshot: &PerformanceSnapshot) -> Result<(), ValidationError> {
    for attempt in &snapshot.quiz_results {
        if !attempt.score.is_finite() {
            return Err(ValidationError::NonFiniteScore {
                topic: attempt.topic.clone(),
            });
        }
        if !(0.0..=100.0).contains(&attempt.score) {
            return Err(ValidationError::ScoreOutOfRange {
                topic: attempt.topic.clone(),
                score: attempt.score,
            });
        }
        if attempt.correct_answers > attempt.total_questions {
            return Err(ValidationError::ImpossibleAnswerCount {
                topic: attempt.topic.clone(),
                correct: attempt.correct_answers,
                total: attempt.total_questions,
            });
        }
    }

    for (index, point) in snapshot.accuracy_trends.iter().enumerate() {
        if !point.accuracy.is_finite() || !(0.0..=100.0).contains(&point.accuracy) {
            return Err(ValidationError::AccuracyOutOfRange {
                index,
                accuracy: point.accuracy,
            });
        }
    }

    Ok(())
}

/// A non-fatal observation about a snapshot.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The topic concerned, if any.
    pub topic: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Surface snapshot conditions the engine will degrade around.
pub fn lint_snapshot(snapshot: &PerformanceSnapshot) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if snapshot.quiz_results.is_empty() {
        warnings.push(ValidationWarning {
            topic: None,
            message: "no quiz results; analysis will return the zero state".into(),
        });
    }

    for attempt in &snapshot.quiz_results {
        if attempt.topic.trim().is_empty() {
            warnings.push(ValidationWarning {
                topic: None,
                message: "attempt with blank topic name".into(),
            });
        }
        if attempt.total_questions == 0 {
            warnings.push(ValidationWarning {
                topic: Some(attempt.topic.clone()),
                message: "attempt with zero questions; accuracy treated as 0".into(),
            });
        }
    }

    if !snapshot.quiz_results.is_empty() && snapshot.quiz_results.len() < 4 {
        warnings.push(ValidationWarning {
            topic: None,
            message: format!(
                "only {} attempt(s); consistency will report insufficient data",
                snapshot.quiz_results.len()
            ),
        });
    }

    if snapshot.accuracy_trends.len() < 2 && snapshot.quiz_results.len() < 2 {
        warnings.push(ValidationWarning {
            topic: None,
            message: "not enough history for velocity estimation".into(),
        });
    }

    warnings
}
