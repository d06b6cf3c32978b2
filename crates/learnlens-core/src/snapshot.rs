//! Snapshot file loading.
//!
//! The engine itself performs no I/O; these helpers sit at the seam between
//! the storage collaborator's JSON exports and the pure analysis call.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::PerformanceSnapshot;

/// Load a performance snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<PerformanceSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file: {}", path.display()))?;
    let snapshot: PerformanceSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshot JSON: {}", path.display()))?;
    Ok(snapshot)
}

/// Recursively load all `.json` snapshot files from a directory.
///
/// Unparseable files are skipped with a warning rather than aborting the
/// whole directory.
pub fn load_snapshot_directory(dir: &Path) -> Result<Vec<(PathBuf, PerformanceSnapshot)>> {
    let mut snapshots = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            snapshots.extend(load_snapshot_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_snapshot(&path) {
                Ok(snapshot) => snapshots.push((path, snapshot)),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SNAPSHOT: &str = r#"{
  "quizResults": [
    {
      "topic": "React",
      "score": 90.0,
      "totalQuestions": 10,
      "correctAnswers": 9,
      "timeTaken": 300,
      "date": "2026-02-01T09:00:00Z"
    }
  ],
  "courseProgress": { "frontend-101": 62.5 },
  "timeSpent": { "total": 420 },
  "accuracyTrends": [
    { "date": "2026-02-01", "accuracy": 90.0, "timestamp": "2026-02-01T09:00:00Z" }
  ]
}"#;

    #[test]
    fn load_valid_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, VALID_SNAPSHOT).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.quiz_results.len(), 1);
        assert_eq!(snapshot.quiz_results[0].topic, "React");
        assert_eq!(snapshot.time_spent.total, 420);
        assert_eq!(snapshot.course_progress.get("frontend-101"), Some(&62.5));
    }

    #[test]
    fn load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_snapshot(&path).is_err());
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let err = load_snapshot(Path::new("does-not-exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.json"));
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.json"), VALID_SNAPSHOT).unwrap();
        std::fs::write(dir.path().join("broken.json"), "nope").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "not json").unwrap();

        let snapshots = load_snapshot_directory(dir.path()).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].0.ends_with("good.json"));
    }
}
