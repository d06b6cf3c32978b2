//! The `learnlens compare` command.

use std::path::PathBuf;

use anyhow::Result;

use learnlens_report::InsightReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u32,
    fail_on_regression: bool,
    format: String,
) -> Result<()> {
    let baseline = InsightReport::load_json(&baseline_path)?;
    let current = InsightReport::load_json(&current_path)?;

    let progress = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} regression(s), {} improvement(s), {} unchanged",
                progress.regressions.len(),
                progress.improvements.len(),
                progress.unchanged
            );

            if !progress.regressions.is_empty() {
                println!("\nRegressions:");
                for r in &progress.regressions {
                    println!(
                        "  {} {}% -> {}% ({}pp)",
                        r.topic, r.baseline_avg, r.current_avg, r.delta
                    );
                }
            }

            if !progress.improvements.is_empty() {
                println!("\nImprovements:");
                for i in &progress.improvements {
                    println!(
                        "  {} {}% -> {}% (+{}pp)",
                        i.topic, i.baseline_avg, i.current_avg, i.delta
                    );
                }
            }

            if progress.new_topics > 0 {
                println!("\n{} new topic(s)", progress.new_topics);
            }
            if progress.removed_topics > 0 {
                println!("{} removed topic(s)", progress.removed_topics);
            }
        }
    }

    if fail_on_regression && progress.has_regressions() {
        std::process::exit(1);
    }

    Ok(())
}
