//! The `learnlens analyze` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use learnlens_core::analysis::AnalysisResult;
use learnlens_core::snapshot::load_snapshot;
use learnlens_core::validate::{lint_snapshot, validate_snapshot};
use learnlens_core::{analyze_performance, Thresholds};
use learnlens_report::markdown::{render_markdown, write_markdown_report};
use learnlens_report::InsightReport;

pub fn execute(
    snapshot_path: PathBuf,
    thresholds_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
    learner: Option<String>,
) -> Result<()> {
    let thresholds = match &thresholds_path {
        Some(path) => Thresholds::load(path)?,
        None => Thresholds::default(),
    };

    let snapshot = load_snapshot(&snapshot_path)?;
    validate_snapshot(&snapshot).context("snapshot violates the input contract")?;

    for warning in lint_snapshot(&snapshot) {
        let prefix = warning
            .topic
            .as_ref()
            .map(|t| format!("[{t}] "))
            .unwrap_or_default();
        eprintln!("Warning: {prefix}{}", warning.message);
    }

    let analysis = analyze_performance(&snapshot, &thresholds);
    let report = InsightReport::new(&snapshot, analysis, learner);

    let formats: Vec<&str> = if format == "all" {
        vec!["table", "json", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "table" => print_summary(&report.analysis),
            "json" => println!("{}", serde_json::to_string_pretty(&report)?),
            "markdown" | "md" => println!("{}", render_markdown(&report)),
            _ => eprintln!("Unknown format: {fmt}"),
        }
    }

    if let Some(output_dir) = output {
        std::fs::create_dir_all(&output_dir)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        let json_path = output_dir.join(format!("insights-{timestamp}.json"));
        report.save_json(&json_path)?;
        eprintln!("Report saved to: {}", json_path.display());

        let md_path = output_dir.join(format!("insights-{timestamp}.md"));
        write_markdown_report(&report, &md_path)?;
        eprintln!("Markdown report: {}", md_path.display());
    }

    Ok(())
}

fn print_summary(analysis: &AnalysisResult) {
    use comfy_table::{Cell, Table};

    println!(
        "Velocity: {}% ({}) | Consistency: {} ({})",
        analysis.learning_velocity.velocity,
        analysis.learning_velocity.trend,
        analysis.consistency_score.score,
        analysis.consistency_score.level,
    );
    println!("{}", analysis.learning_velocity.message);

    if analysis.weak_areas.is_empty() && analysis.strong_areas.is_empty() {
        println!("\nNo quiz history yet — nothing to analyze.");
        return;
    }

    if !analysis.weak_areas.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Weak topic", "Avg", "Attempts", "Severity"]);
        for w in &analysis.weak_areas {
            table.add_row(vec![
                Cell::new(&w.topic),
                Cell::new(format!("{}%", w.avg_score)),
                Cell::new(w.attempts),
                Cell::new(w.severity),
            ]);
        }
        println!("\n{table}");
    }

    if !analysis.strong_areas.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Strong topic", "Avg", "Attempts", "Level"]);
        for s in &analysis.strong_areas {
            table.add_row(vec![
                Cell::new(&s.topic),
                Cell::new(format!("{}%", s.avg_score)),
                Cell::new(s.attempts),
                Cell::new(s.level),
            ]);
        }
        println!("\n{table}");
    }

    if !analysis.readiness.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Topic", "Readiness", "Level", "Consistency"]);
        for r in &analysis.readiness {
            table.add_row(vec![
                Cell::new(&r.topic),
                Cell::new(r.readiness_score),
                Cell::new(r.level),
                Cell::new(r.consistency),
            ]);
        }
        println!("\n{table}");
    }

    if !analysis.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &analysis.recommendations {
            println!("  [{:?}] {} — {}", rec.priority, rec.title, rec.action);
        }
    }

    if !analysis.study_plan.is_empty() {
        println!("\nStudy plan:");
        for day in &analysis.study_plan {
            println!("  Day {}: {} ({} task(s))", day.day, day.focus, day.tasks.len());
        }
    }
}
