//! Benchmarks for flute diagrams.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use flute_trainer::render::{FluteRenderer, Glyphs};
use flute_trainer::NoteTable;

pub fn bench_flute(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/flute");
    let table = NoteTable::standard();

    for (name, glyphs) in [("unicode", Glyphs::UNICODE), ("ascii", Glyphs::ASCII)] {
        let renderer = FluteRenderer::new(glyphs);

        // Full diagram for every note in the table
        group.bench_with_input(BenchmarkId::new("diagram", name), &table, |b, table| {
            b.iter(|| {
                for entry in table.entries() {
                    black_box(renderer.render(black_box(&entry.pattern)));
                }
            })
        });

        // One-line form used by the note listing
        group.bench_with_input(BenchmarkId::new("compact", name), &table, |b, table| {
            b.iter(|| {
                for entry in table.entries() {
                    black_box(renderer.compact(black_box(&entry.pattern)));
                }
            })
        });
    }

    group.finish();
}
