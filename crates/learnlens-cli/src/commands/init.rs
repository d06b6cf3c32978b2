//! The `learnlens init` command.

use anyhow::Result;

use learnlens_core::Thresholds;

pub fn execute() -> Result<()> {
    // Create thresholds.toml with the default cut points spelled out
    if std::path::Path::new("thresholds.toml").exists() {
        println!("thresholds.toml already exists, skipping.");
    } else {
        let config = toml::to_string_pretty(&Thresholds::default())?;
        std::fs::write("thresholds.toml", config)?;
        println!("Created thresholds.toml");
    }

    // Create an example snapshot
    let example_path = std::path::Path::new("example-snapshot.json");
    if example_path.exists() {
        println!("example-snapshot.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SNAPSHOT)?;
        println!("Created example-snapshot.json");
    }

    println!("\nNext steps:");
    println!("  1. Adjust thresholds.toml to your calibration");
    println!("  2. Run: learnlens validate --snapshot example-snapshot.json");
    println!("  3. Run: learnlens analyze --snapshot example-snapshot.json");

    Ok(())
}

const EXAMPLE_SNAPSHOT: &str = r#"{
  "quizResults": [
    {
      "topic": "React",
      "score": 90.0,
      "totalQuestions": 10,
      "correctAnswers": 9,
      "timeTaken": 300,
      "date": "2026-02-01T09:00:00Z"
    },
    {
      "topic": "React",
      "score": 95.0,
      "totalQuestions": 10,
      "correctAnswers": 9,
      "timeTaken": 280,
      "date": "2026-02-03T09:00:00Z"
    },
    {
      "topic": "React",
      "score": 88.0,
      "totalQuestions": 10,
      "correctAnswers": 8,
      "timeTaken": 310,
      "date": "2026-02-05T09:00:00Z"
    },
    {
      "topic": "CSS",
      "score": 40.0,
      "totalQuestions": 10,
      "correctAnswers": 4,
      "timeTaken": 420,
      "date": "2026-02-06T09:00:00Z"
    },
    {
      "topic": "CSS",
      "score": 45.0,
      "totalQuestions": 10,
      "correctAnswers": 5,
      "timeTaken": 390,
      "date": "2026-02-08T09:00:00Z"
    }
  ],
  "courseProgress": {
    "frontend-101": 62.5
  },
  "timeSpent": {
    "total": 540
  },
  "accuracyTrends": [
    { "date": "2026-02-01", "accuracy": 50.0, "timestamp": "2026-02-01T09:00:00Z" },
    { "date": "2026-02-03", "accuracy": 50.0, "timestamp": "2026-02-03T09:00:00Z" },
    { "date": "2026-02-05", "accuracy": 50.0, "timestamp": "2026-02-05T09:00:00Z" },
    { "date": "2026-02-06", "accuracy": 80.0, "timestamp": "2026-02-06T09:00:00Z" },
    { "date": "2026-02-08", "accuracy": 80.0, "timestamp": "2026-02-08T09:00:00Z" },
    { "date": "2026-02-10", "accuracy": 80.0, "timestamp": "2026-02-10T09:00:00Z" }
  ]
}
"#;
