//! End-to-end pipeline tests: init → validate → analyze → compare.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn learnlens() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("learnlens").unwrap()
}

#[test]
fn full_pipeline_from_init() {
    let dir = TempDir::new().unwrap();

    learnlens().current_dir(dir.path()).arg("init").assert().success();

    learnlens()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--snapshot")
        .arg("example-snapshot.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("All snapshots valid"));

    learnlens()
        .current_dir(dir.path())
        .arg("analyze")
        .arg("--snapshot")
        .arg("example-snapshot.json")
        .arg("--thresholds")
        .arg("thresholds.toml")
        .arg("--output")
        .arg("reports")
        .arg("--learner")
        .arg("Alex")
        .assert()
        .success()
        .stdout(predicate::str::contains("accelerating"));

    // Compare the run against itself: no regressions, exit 0.
    let report_path = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "json"))
        .expect("json report written");

    learnlens()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg(&report_path)
        .arg("--current")
        .arg(&report_path)
        .arg("--fail-on-regression")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 regression(s)"));
}

#[test]
fn compare_detects_improvement_between_runs() {
    let dir = TempDir::new().unwrap();

    let early = r#"{
  "quizResults": [
    { "topic": "CSS", "score": 40.0, "totalQuestions": 10, "correctAnswers": 4, "date": "2026-02-01T09:00:00Z" },
    { "topic": "CSS", "score": 45.0, "totalQuestions": 10, "correctAnswers": 5, "date": "2026-02-02T09:00:00Z" }
  ]
}"#;
    let later = r#"{
  "quizResults": [
    { "topic": "CSS", "score": 70.0, "totalQuestions": 10, "correctAnswers": 7, "date": "2026-02-10T09:00:00Z" },
    { "topic": "CSS", "score": 75.0, "totalQuestions": 10, "correctAnswers": 7, "date": "2026-02-11T09:00:00Z" }
  ]
}"#;
    std::fs::write(dir.path().join("early.json"), early).unwrap();
    std::fs::write(dir.path().join("later.json"), later).unwrap();

    for name in ["early", "later"] {
        learnlens()
            .current_dir(dir.path())
            .arg("analyze")
            .arg("--snapshot")
            .arg(format!("{name}.json"))
            .arg("--output")
            .arg(name)
            .assert()
            .success();
        // Keep only the JSON report under a stable name.
        let json = std::fs::read_dir(dir.path().join(name))
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .find(|p| p.extension().is_some_and(|ext| ext == "json"))
            .unwrap();
        std::fs::rename(json, dir.path().join(format!("{name}-report.json"))).unwrap();
    }

    learnlens()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg("early-report.json")
        .arg("--current")
        .arg("later-report.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 improvement(s)"))
        .stdout(predicate::str::contains("CSS"));
}
