//! Input data contracts for the analysis engine.
//!
//! These types mirror the snapshot the quiz-submission and progress-tracking
//! collaborators hand over. Wire field names are camelCase because multiple
//! display surfaces bind to them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single graded quiz attempt. Created by the quiz collaborator; the
/// engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    /// The skill or subject area this quiz covered (e.g. "React").
    pub topic: String,
    /// Graded score as a 0-100 percentage.
    pub score: f64,
    /// Number of questions in the quiz.
    pub total_questions: u32,
    /// Number of correctly answered questions.
    pub correct_answers: u32,
    /// Seconds spent on the attempt.
    #[serde(default)]
    pub time_taken: u32,
    /// When the attempt was submitted.
    pub date: DateTime<Utc>,
}

impl QuizAttempt {
    /// Answer accuracy as a 0-100 percentage, derived from raw counts.
    ///
    /// Accuracy and `score` are tracked as separate fields and must not be
    /// conflated: score reflects grading, accuracy reflects answer counts.
    /// A zero-question quiz yields 0 rather than a division by zero.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.total_questions as f64 * 100.0
        }
    }
}

/// One point in the overall accuracy time series, ordered by time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyPoint {
    /// Display label for the point (e.g. "2026-03-14").
    #[serde(default)]
    pub date: String,
    /// Overall accuracy at this point, 0-100.
    pub accuracy: f64,
    /// When the point was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Total study time bookkeeping. Informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSpent {
    /// Total minutes spent across the platform.
    #[serde(default)]
    pub total: u64,
}

/// The full historical snapshot the engine analyzes.
///
/// The engine recomputes everything from this snapshot on every call and
/// holds no state across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    /// Every graded quiz attempt, in submission order.
    #[serde(default)]
    pub quiz_results: Vec<QuizAttempt>,
    /// Completion percentage per course. Currently informational only.
    #[serde(default)]
    pub course_progress: HashMap<String, f64>,
    /// Aggregate study time.
    #[serde(default)]
    pub time_spent: TimeSpent,
    /// Overall accuracy over time, oldest first.
    #[serde(default)]
    pub accuracy_trends: Vec<AccuracyPoint>,
}
