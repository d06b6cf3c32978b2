//! The analysis entry point.
//!
//! `analyze_performance` runs the fixed pipeline — aggregate, classify,
//! estimate velocity, score consistency, evaluate readiness, plan — and
//! assembles the final result. Pure and stateless: identical input yields
//! identical output, and concurrent callers share nothing.

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_topics;
use crate::classify::{classify_strong_areas, classify_weak_areas, StrongArea, WeakArea};
use crate::config::Thresholds;
use crate::consistency::{score_consistency, ConsistencyScore};
use crate::model::{AccuracyPoint, PerformanceSnapshot};
use crate::planner::{build_recommendations, build_study_plan, Recommendation, StudyDay};
use crate::readiness::{evaluate_readiness, ReadinessItem};
use crate::velocity::{estimate_velocity, LearningVelocity};

/// The full analysis output. Field names are load-bearing: multiple
/// display surfaces bind to them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub weak_areas: Vec<WeakArea>,
    pub strong_areas: Vec<StrongArea>,
    pub recommendations: Vec<Recommendation>,
    pub learning_velocity: LearningVelocity,
    pub consistency_score: ConsistencyScore,
    pub readiness: Vec<ReadinessItem>,
    pub study_plan: Vec<StudyDay>,
}

impl AnalysisResult {
    /// The zero state returned for an empty snapshot. "No data" is a valid
    /// terminal classification, never an error.
    pub fn empty() -> Self {
        Self {
            weak_areas: Vec::new(),
            strong_areas: Vec::new(),
            recommendations: Vec::new(),
            learning_velocity: LearningVelocity::no_data(),
            consistency_score: ConsistencyScore::insufficient(),
            readiness: Vec::new(),
            study_plan: Vec::new(),
        }
    }
}

/// Analyze a learner's performance snapshot.
pub fn analyze_performance(snapshot: &PerformanceSnapshot, thresholds: &Thresholds) -> AnalysisResult {
    if snapshot.quiz_results.is_empty() {
        tracing::debug!("empty snapshot, returning zero state");
        return AnalysisResult::empty();
    }

    let stats = aggregate_topics(&snapshot.quiz_results);
    tracing::debug!(
        attempts = snapshot.quiz_results.len(),
        topics = stats.len(),
        "aggregated snapshot"
    );

    let weak_areas = classify_weak_areas(&stats, thresholds);
    let strong_areas = classify_strong_areas(&stats, thresholds);
    let readiness = evaluate_readiness(&stats, thresholds);

    // Prefer the supplied accuracy series; a snapshot without one still
    // gets a velocity estimate derived from the attempts themselves.
    let learning_velocity = if snapshot.accuracy_trends.is_empty() {
        let derived: Vec<AccuracyPoint> = snapshot
            .quiz_results
            .iter()
            .map(|a| AccuracyPoint {
                date: String::new(),
                accuracy: a.accuracy(),
                timestamp: a.date,
            })
            .collect();
        estimate_velocity(&derived, thresholds)
    } else {
        estimate_velocity(&snapshot.accuracy_trends, thresholds)
    };
    let scores: Vec<f64> = snapshot.quiz_results.iter().map(|a| a.score).collect();
    let consistency_score = score_consistency(&scores, thresholds);

    let recommendations = build_recommendations(&weak_areas, &strong_areas, &readiness, thresholds);
    let study_plan = build_study_plan(&weak_areas, &strong_areas, thresholds);

    AnalysisResult {
        weak_areas,
        strong_areas,
        recommendations,
        learning_velocity,
        consistency_score,
        readiness,
        study_plan,
    }
}
