//! learnlens-core — Learning performance analysis engine.
//!
//! This crate turns a learner's raw quiz-attempt history into structured
//! insight: weak and strong topics, learning velocity, consistency, per-topic
//! readiness, and a prioritized set of recommendations with a short study
//! plan. The engine is a pure function over an in-memory snapshot — no I/O,
//! no caches, no state between calls.

pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod config;
pub mod consistency;
pub mod model;
pub mod planner;
pub mod readiness;
pub mod snapshot;
pub mod validate;
pub mod velocity;

pub use analysis::{analyze_performance, AnalysisResult};
pub use config::Thresholds;
pub use model::PerformanceSnapshot;
