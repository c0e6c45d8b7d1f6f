//! Benchmarks for session bookkeeping.

mod picker;
mod schedule;

pub use picker::bench_picker;
pub use schedule::bench_schedule;
