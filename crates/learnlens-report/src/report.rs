//! Insight report types with JSON persistence and progress comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use learnlens_core::analysis::AnalysisResult;
use learnlens_core::model::PerformanceSnapshot;

/// A persisted analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the analysis ran.
    pub created_at: DateTime<Utc>,
    /// Learner display name, if supplied.
    pub learner: Option<String>,
    /// Number of quiz attempts in the analyzed snapshot.
    pub attempt_count: usize,
    /// Number of distinct topics in the analyzed snapshot.
    pub topic_count: usize,
    /// The full analysis output.
    pub analysis: AnalysisResult,
}

impl InsightReport {
    /// Wrap an analysis result with run metadata.
    pub fn new(
        snapshot: &PerformanceSnapshot,
        analysis: AnalysisResult,
        learner: Option<String>,
    ) -> Self {
        let mut topics: Vec<&str> = snapshot
            .quiz_results
            .iter()
            .map(|a| a.topic.as_str())
            .collect();
        topics.sort_unstable();
        topics.dedup();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            learner,
            attempt_count: snapshot.quiz_results.len(),
            topic_count: topics.len(),
            analysis,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: InsightReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Per-topic average scores: every topic with at least one attempt
    /// appears in the readiness list, so that list is the comparison key.
    fn topic_averages(&self) -> Vec<(String, u32)> {
        self.analysis
            .readiness
            .iter()
            .map(|r| (r.topic.clone(), r.avg_score))
            .collect()
    }

    /// Compare this report against a baseline to detect per-topic
    /// regressions and improvements. `threshold` is in percentage points.
    pub fn compare(&self, baseline: &InsightReport, threshold: u32) -> ProgressReport {
        use std::collections::HashMap;

        let baseline_avgs: HashMap<String, u32> = baseline.topic_averages().into_iter().collect();
        let current_avgs: HashMap<String, u32> = self.topic_averages().into_iter().collect();

        let mut regressions = Vec::new();
        let mut improvements = Vec::new();
        let mut unchanged = 0usize;
        let mut new_topics = 0usize;

        for (topic, &current) in &current_avgs {
            if let Some(&baseline_avg) = baseline_avgs.get(topic) {
                let delta = current as i64 - baseline_avg as i64;
                if delta < -(threshold as i64) {
                    regressions.push(TopicDelta {
                        topic: topic.clone(),
                        baseline_avg,
                        current_avg: current,
                        delta,
                    });
                } else if delta > threshold as i64 {
                    improvements.push(TopicDelta {
                        topic: topic.clone(),
                        baseline_avg,
                        current_avg: current,
                        delta,
                    });
                } else {
                    unchanged += 1;
                }
            } else {
                new_topics += 1;
            }
        }

        let removed_topics = baseline_avgs
            .keys()
            .filter(|t| !current_avgs.contains_key(*t))
            .count();

        regressions.sort_by(|a, b| a.delta.cmp(&b.delta));
        improvements.sort_by(|a, b| b.delta.cmp(&a.delta));

        ProgressReport {
            regressions,
            improvements,
            unchanged,
            new_topics,
            removed_topics,
        }
    }
}

/// Result of comparing two insight reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Topics whose average score dropped past the threshold.
    pub regressions: Vec<TopicDelta>,
    /// Topics whose average score rose past the threshold.
    pub improvements: Vec<TopicDelta>,
    /// Topics with no significant change.
    pub unchanged: usize,
    /// Topics in current but not baseline.
    pub new_topics: usize,
    /// Topics in baseline but not current.
    pub removed_topics: usize,
}

/// A per-topic average-score change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDelta {
    pub topic: String,
    pub baseline_avg: u32,
    pub current_avg: u32,
    /// Percentage points, negative for a drop.
    pub delta: i64,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} regression(s), {} improvement(s), {} unchanged\n\n",
            self.regressions.len(),
            self.improvements.len(),
            self.unchanged
        ));

        if !self.regressions.is_empty() {
            md.push_str("### Regressions\n\n");
            md.push_str("| Topic | Baseline | Current | Delta |\n");
            md.push_str("|-------|----------|---------|-------|\n");
            for r in &self.regressions {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {}pp |\n",
                    r.topic, r.baseline_avg, r.current_avg, r.delta
                ));
            }
            md.push('\n');
        }

        if !self.improvements.is_empty() {
            md.push_str("### Improvements\n\n");
            md.push_str("| Topic | Baseline | Current | Delta |\n");
            md.push_str("|-------|----------|---------|-------|\n");
            for i in &self.improvements {
                md.push_str(&format!(
                    "| {} | {}% | {}% | +{}pp |\n",
                    i.topic, i.baseline_avg, i.current_avg, i.delta
                ));
            }
        }

        md
    }

    /// Returns `true` if any topic regressed.
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use learnlens_core::model::QuizAttempt;
    use learnlens_core::{analyze_performance, Thresholds};

    fn snapshot(scores: &[(&str, f64)]) -> PerformanceSnapshot {
        PerformanceSnapshot {
            quiz_results: scores
                .iter()
                .map(|(topic, score)| QuizAttempt {
                    topic: topic.to_string(),
                    score: *score,
                    total_questions: 10,
                    correct_answers: (*score / 10.0) as u32,
                    time_taken: 120,
                    date: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn make_report(scores: &[(&str, f64)]) -> InsightReport {
        let snap = snapshot(scores);
        let analysis = analyze_performance(&snap, &Thresholds::default());
        InsightReport::new(&snap, analysis, Some("test".into()))
    }

    #[test]
    fn counts_attempts_and_topics() {
        let report = make_report(&[("React", 90.0), ("React", 88.0), ("CSS", 45.0)]);
        assert_eq!(report.attempt_count, 3);
        assert_eq!(report.topic_count, 2);
    }

    #[test]
    fn compare_identical_reports() {
        let baseline = make_report(&[("React", 90.0), ("CSS", 45.0)]);
        let progress = baseline.compare(&baseline, 2);
        assert!(progress.regressions.is_empty());
        assert!(progress.improvements.is_empty());
        assert_eq!(progress.unchanged, 2);
        assert!(!progress.has_regressions());
    }

    #[test]
    fn compare_detects_regression_and_improvement() {
        let baseline = make_report(&[("React", 90.0), ("CSS", 45.0)]);
        let current = make_report(&[("React", 70.0), ("CSS", 65.0)]);

        let progress = current.compare(&baseline, 2);
        assert_eq!(progress.regressions.len(), 1);
        assert_eq!(progress.regressions[0].topic, "React");
        assert_eq!(progress.regressions[0].delta, -20);
        assert_eq!(progress.improvements.len(), 1);
        assert_eq!(progress.improvements[0].topic, "CSS");
        assert!(progress.has_regressions());
    }

    #[test]
    fn compare_counts_new_and_removed_topics() {
        let baseline = make_report(&[("React", 90.0)]);
        let current = make_report(&[("SQL", 70.0)]);

        let progress = current.compare(&baseline, 2);
        assert_eq!(progress.new_topics, 1);
        assert_eq!(progress.removed_topics, 1);
    }

    #[test]
    fn json_round_trip() {
        let report = make_report(&[("React", 90.0), ("CSS", 45.0)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = InsightReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.attempt_count, 2);
        assert_eq!(loaded.analysis.weak_areas.len(), report.analysis.weak_areas.len());
    }

    #[test]
    fn markdown_lists_regressions() {
        let baseline = make_report(&[("React", 90.0)]);
        let current = make_report(&[("React", 60.0)]);

        let md = current.compare(&baseline, 2).to_markdown();
        assert!(md.contains("Regressions"));
        assert!(md.contains("React"));
    }
}
