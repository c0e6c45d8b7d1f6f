//! Benchmarks for schedule iteration.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use flute_trainer::session::Schedule;
use flute_trainer::SessionConfig;

pub fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/schedule");

    // (rounds, step): default session, then progressively longer ones
    for &(rounds, step) in &[(5u32, 0.1f64), (10, 0.01), (50, 0.001)] {
        let config = SessionConfig::new().rounds(rounds).step(step);
        let schedule = Schedule::new(&config).expect("valid config");

        group.bench_with_input(
            BenchmarkId::new("count", format!("{}x{}", rounds, step)),
            &schedule,
            |b, schedule| b.iter(|| black_box(schedule.clone().count())),
        );
    }

    group.finish();
}
