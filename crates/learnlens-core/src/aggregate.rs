//! Per-topic aggregation of raw quiz attempts.

use std::collections::BTreeMap;

use crate::model::QuizAttempt;

/// Summary statistics for one topic, recomputed on every call and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicStat {
    /// Topic identifier.
    pub topic: String,
    /// Number of attempts on this topic. Always >= 1; topics with no
    /// attempts are simply absent.
    pub attempts: u32,
    /// Arithmetic mean of the topic's `score` values. Kept unrounded so
    /// classification happens on the raw mean.
    pub avg_score: f64,
    /// Population standard deviation of the topic's `score` values.
    pub std_dev: f64,
}

/// Arithmetic mean, or 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, or 0 for fewer than two values.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Group attempts by topic and compute per-topic summary statistics.
///
/// Output ordering is unspecified; callers must rely on declared priority
/// fields, never on list position.
pub fn aggregate_topics(attempts: &[QuizAttempt]) -> Vec<TopicStat> {
    let mut by_topic: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for attempt in attempts {
        by_topic
            .entry(attempt.topic.as_str())
            .or_default()
            .push(attempt.score);
    }

    by_topic
        .into_iter()
        .map(|(topic, scores)| TopicStat {
            topic: topic.to_string(),
            attempts: scores.len() as u32,
            avg_score: mean(&scores),
            std_dev: population_std_dev(&scores),
        })
        .collect()
}
