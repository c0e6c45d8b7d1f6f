/*
Fingering Patterns
==================

A fingering describes which holes of the flute are covered for a note.
The flute has a back (thumb) hole and seven finger holes, read from the
mouthpiece down:

    back, 1, 2, 3, 4, 5, 6, 7

Each hole is closed, half-closed, or open. Patterns are built from one of two
starting points and then adjusted hole by hole:

    full()   every hole closed (lowest note)
    empty()  only the back hole closed

Everything is `const`, so the note table is assembled at compile time and an
invalid hole state can never reach the renderer.

Example:
  FingeringPattern::full().with(Hole::Seven, HoleState::Open)   // 1.D
  FingeringPattern::empty().with(Hole::One, HoleState::Closed)  // 1.H
*/

pub mod table;

pub use table::{NoteEntry, NoteId, NoteTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of holes in a pattern (back hole + 7 finger holes)
pub const HOLE_COUNT: usize = 8;

/// Coverage of a single hole
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleState {
    /// Finger fully covers the hole
    Closed,
    /// Hole partially covered (used for overblown notes)
    Half,
    /// Hole uncovered
    Open,
}

impl HoleState {
    /// Fraction of the hole that is covered (1.0, 0.5 or 0.0)
    pub const fn coverage(self) -> f32 {
        match self {
            HoleState::Closed => 1.0,
            HoleState::Half => 0.5,
            HoleState::Open => 0.0,
        }
    }
}

/// Position of a hole in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hole {
    Back = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
}

impl Hole {
    /// All holes in pattern order
    pub const ALL: [Hole; HOLE_COUNT] = [
        Hole::Back,
        Hole::One,
        Hole::Two,
        Hole::Three,
        Hole::Four,
        Hole::Five,
        Hole::Six,
        Hole::Seven,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Ordered hole states for one note: back hole first, then holes 1..7
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingeringPattern {
    holes: [HoleState; HOLE_COUNT],
}

impl FingeringPattern {
    /// Build a pattern from explicit hole states
    pub const fn new(holes: [HoleState; HOLE_COUNT]) -> Self {
        Self { holes }
    }

    /// Every hole closed
    pub const fn full() -> Self {
        Self::new([HoleState::Closed; HOLE_COUNT])
    }

    /// Back hole closed, all finger holes open
    pub const fn empty() -> Self {
        Self::full().with_finger_holes(HoleState::Open)
    }

    /// Every hole open, including the back hole
    pub const fn open() -> Self {
        Self::new([HoleState::Open; HOLE_COUNT])
    }

    /// Return a copy with one hole changed
    pub const fn with(mut self, hole: Hole, state: HoleState) -> Self {
        self.holes[hole.index()] = state;
        self
    }

    const fn with_finger_holes(mut self, state: HoleState) -> Self {
        let mut i = 1;
        while i < HOLE_COUNT {
            self.holes[i] = state;
            i += 1;
        }
        self
    }

    /// State of a single hole
    pub const fn hole(&self, hole: Hole) -> HoleState {
        self.holes[hole.index()]
    }

    /// All hole states in pattern order
    pub const fn holes(&self) -> &[HoleState; HOLE_COUNT] {
        &self.holes
    }

    /// Number of holes that are at least partially covered
    pub fn covered(&self) -> usize {
        self.holes
            .iter()
            .filter(|&&state| state != HoleState::Open)
            .count()
    }
}

impl From<[HoleState; HOLE_COUNT]> for FingeringPattern {
    fn from(holes: [HoleState; HOLE_COUNT]) -> Self {
        Self::new(holes)
    }
}
