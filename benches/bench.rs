// Criterion benchmarks for Streak Tracker

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streak_tracker::core::{estimate_streak, streak_from_metrics, FlameStyle};
use streak_tracker::models::ProfileSnapshot;

fn create_profile(id: usize) -> ProfileSnapshot {
    ProfileSnapshot {
        username: format!("user{}", id),
        created_at: Some(Utc::now() - Duration::days((id % 5000) as i64)),
        public_repo_count: (id % 300) as u64,
        follower_count: (id % 1000) as u64,
        display_name: Some(format!("User {}", id)),
        bio: None,
        avatar_url: None,
    }
}

fn bench_streak_from_metrics(c: &mut Criterion) {
    c.bench_function("streak_from_metrics", |b| {
        b.iter(|| streak_from_metrics(black_box(20), black_box(100), black_box(730)));
    });
}

fn bench_estimate_streak(c: &mut Criterion) {
    let now = Utc::now();
    let mut group = c.benchmark_group("estimate_streak");

    for profile_count in [10, 100, 1000].iter() {
        let profiles: Vec<ProfileSnapshot> = (0..*profile_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("profiles", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| {
                    for profile in &profiles {
                        black_box(estimate_streak(black_box(profile), now));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_flame_style(c: &mut Criterion) {
    c.bench_function("flame_style", |b| {
        b.iter(|| FlameStyle::for_streak(black_box(80)));
    });
}

criterion_group!(benches, bench_streak_from_metrics, bench_estimate_streak, bench_flame_style);

criterion_main!(benches);
