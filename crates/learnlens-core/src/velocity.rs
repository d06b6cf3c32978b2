//! Learning velocity estimation.
//!
//! Compares two recent windows of overall accuracy and classifies the
//! trend. The `message` is surfaced to the learner verbatim and is never
//! empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::mean;
use crate::config::{round_half_up, Thresholds};
use crate::model::AccuracyPoint;

/// Direction of the accuracy trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Accelerating,
    Improving,
    Declining,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Accelerating => write!(f, "accelerating"),
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// Rate of change of overall accuracy between two recent windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningVelocity {
    /// Signed percentage change, rounded half-up.
    pub velocity: i64,
    pub trend: Trend,
    /// Learner-facing summary of direction and magnitude.
    pub message: String,
}

impl LearningVelocity {
    /// The zero state reported when there is not enough history.
    pub fn no_data() -> Self {
        Self {
            velocity: 0,
            trend: Trend::Neutral,
            message: "No data available".into(),
        }
    }
}

/// Estimate velocity from the accuracy time series (oldest first).
///
/// The window is `min(velocity_window, len / 2)` points: the last window
/// against the window before it. A zero prior average is guarded and
/// reported as zero velocity rather than infinity.
pub fn estimate_velocity(trends: &[AccuracyPoint], thresholds: &Thresholds) -> LearningVelocity {
    if trends.len() < 2 {
        return LearningVelocity::no_data();
    }

    let window = thresholds.velocity_window.min(trends.len() / 2).max(1);
    let accuracies: Vec<f64> = trends.iter().map(|p| p.accuracy).collect();
    let recent_avg = mean(&accuracies[accuracies.len() - window..]);
    let prior_avg = mean(&accuracies[accuracies.len() - 2 * window..accuracies.len() - window]);

    let velocity = if prior_avg > 0.0 {
        round_half_up((recent_avg - prior_avg) / prior_avg * 100.0)
    } else {
        0
    };

    let (trend, message) = if velocity >= thresholds.velocity_accelerating_at {
        (
            Trend::Accelerating,
            format!("Accuracy is up {velocity}% over your recent quizzes. Great momentum, keep it going!"),
        )
    } else if velocity > 0 {
        (
            Trend::Improving,
            format!("Accuracy is trending up by {velocity}%. Steady progress."),
        )
    } else if velocity <= thresholds.velocity_declining_at {
        (
            Trend::Declining,
            format!(
                "Accuracy has dropped {}% recently. Consider revisiting your latest topics.",
                velocity.abs()
            ),
        )
    } else if velocity < 0 {
        (
            Trend::Neutral,
            format!(
                "Accuracy dipped slightly ({}%). Nothing alarming, stay consistent.",
                velocity.abs()
            ),
        )
    } else {
        (Trend::Neutral, "Accuracy is holding steady.".into())
    };

    LearningVelocity {
        velocity,
        trend,
        message,
    }
}
