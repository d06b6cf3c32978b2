//! Recommendation and study-plan generation.
//!
//! Combines weak areas, near-boundary readiness items, and mastered topics
//! into a prioritized recommendation list, plus a short day-by-day study
//! plan.

use serde::{Deserialize, Serialize};

use crate::classify::{MasteryLevel, Severity, StrongArea, WeakArea};
use crate::config::Thresholds;
use crate::readiness::{next_tier_cutoff, ReadinessItem, ReadinessLevel};

/// What kind of action a recommendation suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Revise,
    Advance,
    Complete,
    Explore,
}

/// Urgency tier, ordered `high > medium > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One prioritized, actionable suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub topics: Vec<String>,
    pub action: String,
}

/// Kind of task on a study-plan day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Practice,
    Revision,
    Completion,
}

/// One task on a study-plan day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTask {
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub description: String,
}

/// One day of the study plan, with a single focus topic and 1-3 tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDay {
    /// 1-based day number.
    pub day: u32,
    pub focus: String,
    pub tasks: Vec<StudyTask>,
}

/// Build the prioritized recommendation list.
///
/// Ordering: priority `high > medium > low`, then ascending average score
/// within a tier so the most urgent topic comes first.
pub fn build_recommendations(
    weak_areas: &[WeakArea],
    strong_areas: &[StrongArea],
    readiness: &[ReadinessItem],
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    // Carry the avg score alongside each entry as the within-tier sort key.
    let mut ranked: Vec<(Recommendation, u32)> = Vec::new();

    for weak in weak_areas {
        let priority = if weak.severity == Severity::High {
            Priority::High
        } else {
            Priority::Medium
        };
        ranked.push((
            Recommendation {
                kind: RecommendationType::Revise,
                priority,
                title: format!("Revise {}", weak.topic),
                description: format!(
                    "Your average score in {} is {}% across {} attempt(s). Focused revision will close the gap.",
                    weak.topic, weak.avg_score, weak.attempts
                ),
                topics: vec![weak.topic.clone()],
                action: format!("Review {} fundamentals and retake a practice quiz", weak.topic),
            },
            weak.avg_score,
        ));
    }

    for item in readiness {
        // Only items sitting just under their next tier are worth a nudge.
        let Some(target) = next_tier_cutoff(item.level, thresholds) else {
            continue;
        };
        if item.level == ReadinessLevel::NeedsPractice {
            continue;
        }
        let gap = target.saturating_sub(item.readiness_score);
        if gap == 0 || gap > thresholds.advance_margin {
            continue;
        }
        ranked.push((
            Recommendation {
                kind: RecommendationType::Advance,
                priority: Priority::Medium,
                title: format!("Push {} to the next level", item.topic),
                description: format!(
                    "Your readiness in {} is {} — only {} point(s) from the next tier.",
                    item.topic, item.readiness_score, gap
                ),
                topics: vec![item.topic.clone()],
                action: format!("Take one more {} quiz to clear the bar", item.topic),
            },
            item.avg_score,
        ));
    }

    for strong in strong_areas {
        if strong.level != MasteryLevel::Expert {
            continue;
        }
        ranked.push((
            Recommendation {
                kind: RecommendationType::Complete,
                priority: Priority::Low,
                title: format!("{} mastered", strong.topic),
                description: format!(
                    "Average score {}% across {} attempt(s). Outstanding work!",
                    strong.avg_score, strong.attempts
                ),
                topics: vec![strong.topic.clone()],
                action: format!("Mark {} complete and pick an advanced challenge", strong.topic),
            },
            strong.avg_score,
        ));
    }

    if weak_areas.is_empty() && !strong_areas.is_empty() {
        ranked.push((
            Recommendation {
                kind: RecommendationType::Explore,
                priority: Priority::Low,
                title: "Explore new topics".into(),
                description: "No weak areas detected. Broaden your skills with fresh material.".into(),
                topics: Vec::new(),
                action: "Browse the catalog for a topic you haven't tried".into(),
            },
            u32::MAX,
        ));
    }

    ranked.sort_by(|a, b| a.0.priority.cmp(&b.0.priority).then(a.1.cmp(&b.1)));
    ranked.into_iter().map(|(rec, _)| rec).collect()
}

fn weak_day_tasks(weak: &WeakArea) -> Vec<StudyTask> {
    let mut tasks = vec![
        StudyTask {
            kind: TaskKind::Practice,
            description: format!("Take a practice quiz on {}", weak.topic),
        },
        StudyTask {
            kind: TaskKind::Revision,
            description: format!("Review notes and flashcards for {}", weak.topic),
        },
    ];
    if weak.severity == Severity::High {
        tasks.push(StudyTask {
            kind: TaskKind::Revision,
            description: format!("Work through {} fundamentals step by step", weak.topic),
        });
    }
    tasks
}

fn strong_day_tasks(strong: &StrongArea) -> Vec<StudyTask> {
    let mut tasks = vec![StudyTask {
        kind: TaskKind::Revision,
        description: format!("Light review of {} to keep it sharp", strong.topic),
    }];
    if strong.level == MasteryLevel::Expert {
        tasks.push(StudyTask {
            kind: TaskKind::Completion,
            description: format!("Wrap up any remaining {} material", strong.topic),
        });
    }
    tasks
}

/// Build the day-by-day study plan.
///
/// Each day gets one focus topic: round-robin over weak areas (most urgent
/// first), falling back to review of strong areas once weak areas are
/// exhausted. Returns an empty plan when there is nothing to study.
pub fn build_study_plan(
    weak_areas: &[WeakArea],
    strong_areas: &[StrongArea],
    thresholds: &Thresholds,
) -> Vec<StudyDay> {
    let mut weak: Vec<&WeakArea> = weak_areas.iter().collect();
    weak.sort_by_key(|w| w.avg_score);

    let rotation: Vec<(String, Vec<StudyTask>)> = weak
        .iter()
        .map(|w| (w.topic.clone(), weak_day_tasks(w)))
        .chain(
            strong_areas
                .iter()
                .map(|s| (s.topic.clone(), strong_day_tasks(s))),
        )
        .collect();

    if rotation.is_empty() {
        return Vec::new();
    }

    (0..thresholds.plan_days)
        .map(|i| {
            let (focus, tasks) = &rotation[i % rotation.len()];
            StudyDay {
                day: i as u32 + 1,
                focus: focus.clone(),
                tasks: tasks.clone(),
            }
        })
        .collect()
}
