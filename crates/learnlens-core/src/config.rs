//! Classification thresholds.
//!
//! Every cut point the engine classifies against lives here as a named,
//! tunable constant. The defaults were calibrated against the consuming
//! UI's bucket counts (3 severity tiers, 3 strength tiers, 4 readiness
//! tiers) and can be recalibrated from a TOML file without touching any
//! classification logic.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// All tunable cut points and weights used by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Mean score below this marks a topic weak; at or above, strong.
    pub mastery_cutoff: f64,
    /// Weak-area severity: mean below this is `high`.
    pub severity_high_below: f64,
    /// Weak-area severity: mean below this (and at/above high) is `medium`;
    /// the rest up to the mastery cutoff is `low`.
    pub severity_medium_below: f64,
    /// Strong-area level: mean at/above this is `advanced`.
    pub level_advanced_at: f64,
    /// Strong-area level: mean at/above this is `expert`.
    pub level_expert_at: f64,

    /// Preferred recent/prior window length for velocity estimation.
    pub velocity_window: usize,
    /// Velocity at/above this is `accelerating`.
    pub velocity_accelerating_at: i64,
    /// Velocity at/below this is `declining`.
    pub velocity_declining_at: i64,

    /// Fewer data points than this reports `insufficient-data`.
    pub consistency_min_points: usize,
    /// Consistency score at/above this is `moderate` (below is `erratic`).
    pub consistency_moderate_at: u32,
    /// Consistency score at/above this is `consistent`.
    pub consistency_consistent_at: u32,
    /// Consistency score at/above this is `highly-consistent`.
    pub consistency_high_at: u32,
    /// Neutral consistency reported for single-attempt topics.
    pub single_attempt_consistency: u32,

    /// Readiness weight on the topic's mean score.
    pub readiness_score_weight: f64,
    /// Readiness weight on the topic's consistency.
    pub readiness_consistency_weight: f64,
    /// Readiness weight on practice volume.
    pub readiness_volume_weight: f64,
    /// Attempts beyond this stop increasing the volume component.
    pub readiness_attempt_cap: u32,
    /// Readiness at/above this is `almost`.
    pub readiness_almost_at: u32,
    /// Readiness at/above this is `ready`.
    pub readiness_ready_at: u32,
    /// Readiness at/above this is `expert`.
    pub readiness_expert_at: u32,
    /// Attempt volume below this triggers a practice-more requirement.
    pub readiness_min_attempts: u32,

    /// Readiness this close below the next tier earns an advance
    /// recommendation.
    pub advance_margin: u32,
    /// Number of days in the generated study plan.
    pub plan_days: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mastery_cutoff: 75.0,
            severity_high_below: 50.0,
            severity_medium_below: 65.0,
            level_advanced_at: 85.0,
            level_expert_at: 95.0,
            velocity_window: 5,
            velocity_accelerating_at: 10,
            velocity_declining_at: -10,
            consistency_min_points: 4,
            consistency_moderate_at: 40,
            consistency_consistent_at: 65,
            consistency_high_at: 85,
            single_attempt_consistency: 50,
            readiness_score_weight: 0.6,
            readiness_consistency_weight: 0.3,
            readiness_volume_weight: 0.1,
            readiness_attempt_cap: 10,
            readiness_almost_at: 60,
            readiness_ready_at: 75,
            readiness_expert_at: 90,
            readiness_min_attempts: 3,
            advance_margin: 5,
            plan_days: 7,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read thresholds file: {}", path.display()))?;
        let thresholds: Thresholds = toml::from_str(&content)
            .with_context(|| format!("failed to parse thresholds TOML: {}", path.display()))?;
        Ok(thresholds)
    }
}

/// Round half-up to the nearest integer (0.5 rounds toward positive
/// infinity). The single rounding rule used for every percentage field.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Round a 0-100 percentage, clamping into range.
pub fn round_pct(value: f64) -> u32 {
    round_half_up(value).clamp(0, 100) as u32
}
