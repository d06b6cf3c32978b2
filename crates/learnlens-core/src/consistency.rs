//! Consistency scoring.
//!
//! Lower score dispersion means higher consistency: the score is the
//! coefficient of variation inverted onto a 0-100 scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::{mean, population_std_dev, TopicStat};
use crate::config::{round_pct, Thresholds};

/// Qualitative consistency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyLevel {
    InsufficientData,
    Erratic,
    Moderate,
    Consistent,
    HighlyConsistent,
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyLevel::InsufficientData => write!(f, "insufficient-data"),
            ConsistencyLevel::Erratic => write!(f, "erratic"),
            ConsistencyLevel::Moderate => write!(f, "moderate"),
            ConsistencyLevel::Consistent => write!(f, "consistent"),
            ConsistencyLevel::HighlyConsistent => write!(f, "highly-consistent"),
        }
    }
}

/// Inverse measure of score variability, 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyScore {
    pub score: u32,
    pub level: ConsistencyLevel,
}

impl ConsistencyScore {
    /// The zero state reported when there are too few data points.
    pub fn insufficient() -> Self {
        Self {
            score: 0,
            level: ConsistencyLevel::InsufficientData,
        }
    }
}

/// `clamp(100 - stdDev/mean * 100, 0, 100)`, with a zero mean guarded to 0.
fn variation_score(avg: f64, std_dev: f64) -> u32 {
    if avg <= 0.0 {
        return 0;
    }
    round_pct(100.0 - std_dev / avg * 100.0)
}

fn bucket(score: u32, thresholds: &Thresholds) -> ConsistencyLevel {
    if score >= thresholds.consistency_high_at {
        ConsistencyLevel::HighlyConsistent
    } else if score >= thresholds.consistency_consistent_at {
        ConsistencyLevel::Consistent
    } else if score >= thresholds.consistency_moderate_at {
        ConsistencyLevel::Moderate
    } else {
        ConsistencyLevel::Erratic
    }
}

/// Overall consistency across all quiz scores.
///
/// Fewer than `consistency_min_points` scores is not an error; it is the
/// `insufficient-data` terminal classification.
pub fn score_consistency(scores: &[f64], thresholds: &Thresholds) -> ConsistencyScore {
    if scores.len() < thresholds.consistency_min_points {
        return ConsistencyScore::insufficient();
    }
    let score = variation_score(mean(scores), population_std_dev(scores));
    ConsistencyScore {
        score,
        level: bucket(score, thresholds),
    }
}

/// Per-topic consistency used by the readiness evaluator.
///
/// A single-attempt topic has no dispersion of its own and reports the
/// configured neutral default instead.
pub fn topic_consistency(stat: &TopicStat, thresholds: &Thresholds) -> u32 {
    if stat.attempts < 2 {
        return thresholds.single_attempt_consistency;
    }
    variation_score(stat.avg_score, stat.std_dev)
}
