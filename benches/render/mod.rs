//! Benchmarks for text rendering.

mod flute;
mod frame;

pub use flute::bench_flute;
pub use frame::bench_frame;
