use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use learnlens_core::aggregate::aggregate_topics;
use learnlens_core::analyze_performance;
use learnlens_core::model::{AccuracyPoint, PerformanceSnapshot, QuizAttempt};
use learnlens_core::Thresholds;

fn make_snapshot(attempts: usize, topics: usize) -> PerformanceSnapshot {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let quiz_results: Vec<QuizAttempt> = (0..attempts)
        .map(|i| QuizAttempt {
            topic: format!("topic-{}", i % topics),
            score: 40.0 + (i % 60) as f64,
            total_questions: 10,
            correct_answers: (i % 10) as u32,
            time_taken: 180,
            date: start + Duration::hours(i as i64),
        })
        .collect();

    let accuracy_trends: Vec<AccuracyPoint> = (0..attempts)
        .map(|i| AccuracyPoint {
            date: String::new(),
            accuracy: 50.0 + (i % 40) as f64,
            timestamp: start + Duration::hours(i as i64),
        })
        .collect();

    PerformanceSnapshot {
        quiz_results,
        accuracy_trends,
        ..Default::default()
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let snapshot = make_snapshot(1000, 20);
    c.bench_function("aggregate_topics/1000x20", |b| {
        b.iter(|| aggregate_topics(black_box(&snapshot.quiz_results)))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let thresholds = Thresholds::default();
    let mut group = c.benchmark_group("analyze_performance");

    for (attempts, topics) in [(100, 5), (1000, 20), (10_000, 50)] {
        let snapshot = make_snapshot(attempts, topics);
        group.bench_function(format!("{attempts}x{topics}"), |b| {
            b.iter(|| analyze_performance(black_box(&snapshot), black_box(&thresholds)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_analyze);
criterion_main!(benches);
