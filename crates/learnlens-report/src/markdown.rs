//! Markdown report rendering.
//!
//! Produces a shareable markdown document from an insight report, for
//! surfaces that live outside the terminal (wikis, PR comments, email).

use std::path::Path;

use anyhow::Result;

use crate::report::InsightReport;

/// Render an insight report as a markdown document.
pub fn render_markdown(report: &InsightReport) -> String {
    let mut md = String::new();
    let analysis = &report.analysis;

    md.push_str("# Learning insights\n\n");
    if let Some(learner) = &report.learner {
        md.push_str(&format!("Learner: **{learner}**\n\n"));
    }
    md.push_str(&format!(
        "{} attempt(s) across {} topic(s) | generated {}\n\n",
        report.attempt_count,
        report.topic_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Momentum\n\n");
    md.push_str(&format!(
        "- Velocity: **{}%** ({})\n- {}\n- Consistency: **{}** ({})\n\n",
        analysis.learning_velocity.velocity,
        analysis.learning_velocity.trend,
        analysis.learning_velocity.message,
        analysis.consistency_score.score,
        analysis.consistency_score.level,
    ));

    if !analysis.weak_areas.is_empty() {
        md.push_str("## Weak areas\n\n");
        md.push_str("| Topic | Avg score | Attempts | Severity |\n");
        md.push_str("|-------|-----------|----------|----------|\n");
        for w in &analysis.weak_areas {
            md.push_str(&format!(
                "| {} | {}% | {} | {} |\n",
                w.topic, w.avg_score, w.attempts, w.severity
            ));
        }
        md.push('\n');
    }

    if !analysis.strong_areas.is_empty() {
        md.push_str("## Strong areas\n\n");
        md.push_str("| Topic | Avg score | Attempts | Level |\n");
        md.push_str("|-------|-----------|----------|-------|\n");
        for s in &analysis.strong_areas {
            md.push_str(&format!(
                "| {} | {}% | {} | {} |\n",
                s.topic, s.avg_score, s.attempts, s.level
            ));
        }
        md.push('\n');
    }

    if !analysis.readiness.is_empty() {
        md.push_str("## Readiness\n\n");
        md.push_str("| Topic | Level | Readiness | Avg | Consistency | Attempts |\n");
        md.push_str("|-------|-------|-----------|-----|-------------|----------|\n");
        for r in &analysis.readiness {
            md.push_str(&format!(
                "| {} | {} | {} | {}% | {} | {} |\n",
                r.topic, r.level, r.readiness_score, r.avg_score, r.consistency, r.attempts
            ));
        }
        md.push('\n');
        for r in &analysis.readiness {
            md.push_str(&format!("**{}** next steps:\n", r.topic));
            for req in &r.requirements {
                md.push_str(&format!("- {req}\n"));
            }
            md.push('\n');
        }
    }

    if !analysis.recommendations.is_empty() {
        md.push_str("## Recommendations\n\n");
        for rec in &analysis.recommendations {
            md.push_str(&format!(
                "- **{}** ({:?} priority): {} _{}_\n",
                rec.title,
                rec.priority,
                rec.description,
                rec.action
            ));
        }
        md.push('\n');
    }

    if !analysis.study_plan.is_empty() {
        md.push_str("## Study plan\n\n");
        for day in &analysis.study_plan {
            md.push_str(&format!("### Day {} — {}\n\n", day.day, day.focus));
            for task in &day.tasks {
                md.push_str(&format!("- [{:?}] {}\n", task.kind, task.description));
            }
            md.push('\n');
        }
    }

    if analysis.weak_areas.is_empty() && analysis.strong_areas.is_empty() {
        md.push_str("_No quiz history yet — insights will appear after the first attempts._\n");
    }

    md
}

/// Write the markdown report to a file.
pub fn write_markdown_report(report: &InsightReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_markdown(report))?;
    Ok(())
}
