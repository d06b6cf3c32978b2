//! Weak-area and strong-area classification.
//!
//! A topic is either weak or strong on any single invocation, never both:
//! the partition happens at the mastery cutoff on the raw (unrounded) mean.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::TopicStat;
use crate::config::{round_pct, Thresholds};

/// How urgently a weak topic needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// Mastery tier for a strong topic.
///
/// The progression ladder is fixed: proficient → advanced → expert →
/// master (terminal). `next_label` walks it for "next level" lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    Proficient,
    Advanced,
    Expert,
}

impl MasteryLevel {
    /// The next rung on the progression ladder.
    pub fn next_label(self) -> &'static str {
        match self {
            MasteryLevel::Proficient => "advanced",
            MasteryLevel::Advanced => "expert",
            MasteryLevel::Expert => "master",
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasteryLevel::Proficient => write!(f, "proficient"),
            MasteryLevel::Advanced => write!(f, "advanced"),
            MasteryLevel::Expert => write!(f, "expert"),
        }
    }
}

/// A topic whose mean score falls below the mastery cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakArea {
    pub topic: String,
    /// Mean score rounded half-up, 0-100.
    pub avg_score: u32,
    pub attempts: u32,
    pub severity: Severity,
}

/// A topic whose mean score meets or exceeds the mastery cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongArea {
    pub topic: String,
    /// Mean score rounded half-up, 0-100.
    pub avg_score: u32,
    pub attempts: u32,
    pub level: MasteryLevel,
}

/// Severity tier for a weak topic's raw mean score.
fn severity_for(avg_score: f64, thresholds: &Thresholds) -> Severity {
    if avg_score < thresholds.severity_high_below {
        Severity::High
    } else if avg_score < thresholds.severity_medium_below {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Mastery tier for a strong topic's raw mean score.
fn level_for(avg_score: f64, thresholds: &Thresholds) -> MasteryLevel {
    if avg_score >= thresholds.level_expert_at {
        MasteryLevel::Expert
    } else if avg_score >= thresholds.level_advanced_at {
        MasteryLevel::Advanced
    } else {
        MasteryLevel::Proficient
    }
}

/// Topics below the mastery cutoff, tagged with a severity tier.
pub fn classify_weak_areas(stats: &[TopicStat], thresholds: &Thresholds) -> Vec<WeakArea> {
    stats
        .iter()
        .filter(|s| s.attempts >= 1 && s.avg_score < thresholds.mastery_cutoff)
        .map(|s| WeakArea {
            topic: s.topic.clone(),
            avg_score: round_pct(s.avg_score),
            attempts: s.attempts,
            severity: severity_for(s.avg_score, thresholds),
        })
        .collect()
}

/// Topics at or above the mastery cutoff, tagged with a mastery level.
pub fn classify_strong_areas(stats: &[TopicStat], thresholds: &Thresholds) -> Vec<StrongArea> {
    stats
        .iter()
        .filter(|s| s.attempts >= 1 && s.avg_score >= thresholds.mastery_cutoff)
        .map(|s| StrongArea {
            topic: s.topic.clone(),
            avg_score: round_pct(s.avg_score),
            attempts: s.attempts,
            level: level_for(s.avg_score, thresholds),
        })
        .collect()
}
