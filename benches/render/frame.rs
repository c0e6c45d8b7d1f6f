//! Benchmarks for frame layout.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use flute_trainer::render::{frame, FluteRenderer, Frame, Header};
use flute_trainer::FingeringPattern;

/// Roughly the size of a `big` figlet label
fn fake_label(width: usize) -> String {
    (0..8).map(|_| format!("{}\n", "|".repeat(width))).collect()
}

pub fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");
    let flute = FluteRenderer::default().render(&FingeringPattern::full());
    let header = Header {
        step: 0.1,
        interval: 2.0,
        round: 0,
        rounds: 5,
    };

    for &width in &[10usize, 30, 80] {
        let label = fake_label(width);

        group.bench_with_input(BenchmarkId::new("compose", width), &label, |b, label| {
            b.iter(|| black_box(Frame::compose(header, black_box(label), black_box(&flute))))
        });

        group.bench_with_input(BenchmarkId::new("indent", width), &label, |b, label| {
            b.iter(|| black_box(frame::indent(black_box(label), 14)))
        });
    }

    group.finish();
}
