//! Benchmarks for unduplicated note picking.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use flute_trainer::session::NotePicker;
use flute_trainer::NoteTable;

pub fn bench_picker(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/picker");
    let table = NoteTable::standard();

    for ids in [vec!["1.C", "1.D"], vec!["1.C", "1.D", "1.E", "1.F"], Vec::new()] {
        let notes = if ids.is_empty() {
            table.clone()
        } else {
            table.select(ids.as_slice()).expect("known notes")
        };
        let candidates = notes.ids();
        let mut picker = NotePicker::seeded(1);

        group.bench_with_input(
            BenchmarkId::new("pick", candidates.len()),
            &candidates,
            |b, candidates| {
                let mut previous = None;
                b.iter(|| {
                    previous = picker.pick(candidates, previous.as_ref()).copied();
                    black_box(previous)
                })
            },
        );
    }

    group.finish();
}
