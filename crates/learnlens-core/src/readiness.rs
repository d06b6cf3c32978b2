//! Per-topic readiness evaluation.
//!
//! Readiness blends mastery, consistency, and practice volume into one
//! 0-100 score with actionable requirements for reaching the next tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::TopicStat;
use crate::config::{round_half_up, Thresholds};
use crate::consistency::topic_consistency;

/// Readiness tier for advancing past a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessLevel {
    Expert,
    Ready,
    Almost,
    NeedsPractice,
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadinessLevel::Expert => write!(f, "expert"),
            ReadinessLevel::Ready => write!(f, "ready"),
            ReadinessLevel::Almost => write!(f, "almost"),
            ReadinessLevel::NeedsPractice => write!(f, "needs-practice"),
        }
    }
}

/// Composite readiness for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessItem {
    pub topic: String,
    pub level: ReadinessLevel,
    /// Weighted blend of mean score, consistency, and attempt volume.
    pub readiness_score: u32,
    /// Mean score rounded half-up, 0-100.
    pub avg_score: u32,
    /// Topic consistency, 0-100 (neutral default for single attempts).
    pub consistency: u32,
    pub attempts: u32,
    /// 1-3 short actionable steps toward the next tier.
    pub requirements: Vec<String>,
}

fn level_for(score: u32, thresholds: &Thresholds) -> ReadinessLevel {
    if score >= thresholds.readiness_expert_at {
        ReadinessLevel::Expert
    } else if score >= thresholds.readiness_ready_at {
        ReadinessLevel::Ready
    } else if score >= thresholds.readiness_almost_at {
        ReadinessLevel::Almost
    } else {
        ReadinessLevel::NeedsPractice
    }
}

/// Readiness score this item would need for the next tier up, if any.
pub fn next_tier_cutoff(level: ReadinessLevel, thresholds: &Thresholds) -> Option<u32> {
    match level {
        ReadinessLevel::NeedsPractice => Some(thresholds.readiness_almost_at),
        ReadinessLevel::Almost => Some(thresholds.readiness_ready_at),
        ReadinessLevel::Ready => Some(thresholds.readiness_expert_at),
        ReadinessLevel::Expert => None,
    }
}

fn requirements_for(
    level: ReadinessLevel,
    avg_score: u32,
    consistency: u32,
    attempts: u32,
    thresholds: &Thresholds,
) -> Vec<String> {
    let Some(target) = next_tier_cutoff(level, thresholds) else {
        return vec!["Maintain your performance with periodic review".into()];
    };

    let mut requirements = Vec::new();
    if avg_score < target {
        requirements.push(format!("Increase average score above {target}%"));
    }
    if attempts < thresholds.readiness_min_attempts {
        requirements.push(format!(
            "Attempt at least {} more quizzes",
            thresholds.readiness_min_attempts - attempts
        ));
    }
    if consistency < thresholds.consistency_consistent_at {
        requirements.push("Improve consistency with regular practice sessions".into());
    }
    if requirements.is_empty() {
        requirements.push("Keep practicing to lock in the next tier".into());
    }
    requirements.truncate(3);
    requirements
}

/// Evaluate readiness for every topic with at least one attempt.
pub fn evaluate_readiness(stats: &[TopicStat], thresholds: &Thresholds) -> Vec<ReadinessItem> {
    stats
        .iter()
        .filter(|s| s.attempts >= 1)
        .map(|s| {
            let consistency = topic_consistency(s, thresholds);
            let volume = s.attempts.min(thresholds.readiness_attempt_cap) as f64 * 10.0;
            let blended = thresholds.readiness_score_weight * s.avg_score
                + thresholds.readiness_consistency_weight * consistency as f64
                + thresholds.readiness_volume_weight * volume;
            let readiness_score = round_half_up(blended).clamp(0, 100) as u32;
            let level = level_for(readiness_score, thresholds);

            let avg_score = round_half_up(s.avg_score).clamp(0, 100) as u32;
            ReadinessItem {
                topic: s.topic.clone(),
                level,
                readiness_score,
                avg_score,
                consistency,
                attempts: s.attempts,
                requirements: requirements_for(level, avg_score, consistency, s.attempts, thresholds),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(topic: &str, attempts: u32, avg: f64, std_dev: f64) -> TopicStat {
        TopicStat {
            topic: topic.into(),
            attempts,
            avg_score: avg,
            std_dev,
        }
    }

    #[test]
    fn blends_score_consistency_and_volume() {
        let t = Thresholds::default();
        // consistency = 100 - 0/90*100 = 100; volume = min(5,10)*10 = 50
        // readiness = 0.6*90 + 0.3*100 + 0.1*50 = 89
        let items = evaluate_readiness(&[stat("React", 5, 90.0, 0.0)], &t);
        assert_eq!(items[0].readiness_score, 89);
        assert_eq!(items[0].level, ReadinessLevel::Ready);
    }

    #[test]
    fn attempt_volume_caps_at_ten() {
        let t = Thresholds::default();
        let capped = evaluate_readiness(&[stat("a", 10, 80.0, 0.0)], &t);
        let over = evaluate_readiness(&[stat("a", 50, 80.0, 0.0)], &t);
        assert_eq!(capped[0].readiness_score, over[0].readiness_score);
    }

    #[test]
    fn single_attempt_uses_neutral_consistency() {
        let t = Thresholds::default();
        // readiness = 0.6*70 + 0.3*50 + 0.1*10 = 58 -> needs-practice
        let items = evaluate_readiness(&[stat("SQL", 1, 70.0, 0.0)], &t);
        assert_eq!(items[0].consistency, 50);
        assert_eq!(items[0].readiness_score, 58);
        assert_eq!(items[0].level, ReadinessLevel::NeedsPractice);
    }

    #[test]
    fn expert_tier_gets_maintain_requirement() {
        let t = Thresholds::default();
        // 0.6*98 + 0.3*100 + 0.1*100 = 98.8 -> 99, expert
        let items = evaluate_readiness(&[stat("React", 10, 98.0, 0.0)], &t);
        assert_eq!(items[0].level, ReadinessLevel::Expert);
        assert_eq!(items[0].requirements.len(), 1);
        assert!(items[0].requirements[0].contains("Maintain"));
    }

    #[test]
    fn requirements_name_the_gaps() {
        let t = Thresholds::default();
        // Low score, one attempt, neutral consistency: all three gaps fire.
        let items = evaluate_readiness(&[stat("CSS", 1, 40.0, 0.0)], &t);
        let reqs = &items[0].requirements;
        assert_eq!(reqs.len(), 3);
        assert!(reqs[0].contains("Increase average score above 60%"));
        assert!(reqs[1].contains("2 more quizzes"));
        assert!(reqs[2].contains("consistency"));
    }

    #[test]
    fn requirements_never_empty() {
        let t = Thresholds::default();
        for avg in [10.0, 55.0, 74.0, 88.0, 99.0] {
            for attempts in [1, 2, 5, 12] {
                let items = evaluate_readiness(&[stat("x", attempts, avg, 3.0)], &t);
                let n = items[0].requirements.len();
                assert!((1..=3).contains(&n), "avg {avg} attempts {attempts}: {n}");
            }
        }
    }

    #[test]
    fn monotone_in_score() {
        // Raising the mean (attempts fixed) never lowers readiness.
        let t = Thresholds::default();
        let mut last = 0;
        for avg in 0..=100 {
            let items = evaluate_readiness(&[stat("x", 4, avg as f64, 5.0)], &t);
            let score = items[0].readiness_score;
            assert!(score >= last, "readiness dropped at avg {avg}");
            last = score;
        }
    }

    #[test]
    fn readiness_clamped_to_range() {
        let t = Thresholds::default();
        let items = evaluate_readiness(&[stat("x", 10, 100.0, 0.0)], &t);
        assert!(items[0].readiness_score <= 100);
    }

    #[test]
    fn needs_practice_serde_is_kebab_case() {
        let json = serde_json::to_value(ReadinessLevel::NeedsPractice).unwrap();
        assert_eq!(json, "needs-practice");
    }
}
