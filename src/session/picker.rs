//! Random note selection that never repeats the previous note

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pick a random item that differs from `previous`.
///
/// Redraws until the pick differs. With a single candidate that candidate is
/// returned even if it repeats. Returns `None` only for an empty slice.
pub fn pick_unduplicated<'a, T: PartialEq, R: Rng>(
    rng: &mut R,
    items: &'a [T],
    previous: Option<&T>,
) -> Option<&'a T> {
    match items.len() {
        0 => None,
        1 => items.first(),
        len => loop {
            let item = &items[rng.random_range(0..len)];
            if previous != Some(item) {
                return Some(item);
            }
        },
    }
}

/// Note picker owning its random source
#[derive(Debug, Clone)]
pub struct NotePicker<R = StdRng> {
    rng: R,
}

impl NotePicker<StdRng> {
    /// Picker seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> NotePicker<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick<'a, T: PartialEq>(&mut self, items: &'a [T], previous: Option<&T>) -> Option<&'a T> {
        pick_unduplicated(&mut self.rng, items, previous)
    }
}
