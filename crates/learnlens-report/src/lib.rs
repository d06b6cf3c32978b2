//! learnlens-report — Report persistence, comparison, and rendering.

pub mod markdown;
pub mod report;

pub use report::{InsightReport, ProgressReport};
