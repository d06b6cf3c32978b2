//! The `learnlens validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnlens_core::snapshot::{load_snapshot, load_snapshot_directory};
use learnlens_core::validate::{lint_snapshot, validate_snapshot};

pub fn execute(snapshot_path: PathBuf) -> Result<()> {
    let snapshots = if snapshot_path.is_dir() {
        load_snapshot_directory(&snapshot_path)?
    } else {
        vec![(snapshot_path.clone(), load_snapshot(&snapshot_path)?)]
    };

    let mut total_warnings = 0;
    let mut total_errors = 0;

    for (path, snapshot) in &snapshots {
        println!(
            "Snapshot: {} ({} attempts)",
            path.display(),
            snapshot.quiz_results.len()
        );

        if let Err(e) = validate_snapshot(snapshot) {
            println!("  ERROR: {e}");
            total_errors += 1;
            continue;
        }

        let warnings = lint_snapshot(snapshot);
        for w in &warnings {
            let prefix = w
                .topic
                .as_ref()
                .map(|t| format!("  [{t}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_errors > 0 {
        anyhow::bail!("{total_errors} snapshot(s) violate the input contract");
    }

    if total_warnings == 0 {
        println!("All snapshots valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
