//! Note table - which fingering plays which note
//!
//! Note names follow German convention: `H` is B natural and `B` is B flat.
//! Ids are written `octave.name`, e.g. `1.F#`.

use std::fmt;

use super::HoleState::{Closed, Half, Open};
use super::{FingeringPattern, Hole};

/// Identifier of a note: octave number and letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId {
    pub octave: u8,
    pub name: &'static str,
}

impl NoteId {
    pub const fn new(octave: u8, name: &'static str) -> Self {
        Self { octave, name }
    }

    /// Text handed to the label renderer, e.g. `1  F#`
    pub fn label(&self) -> String {
        format!("{}  {}", self.octave, self.name)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.octave, self.name)
    }
}

/// A note and the fingering that plays it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEntry {
    pub id: NoteId,
    pub pattern: FingeringPattern,
}

impl NoteEntry {
    pub const fn new(octave: u8, name: &'static str, pattern: FingeringPattern) -> Self {
        Self {
            id: NoteId::new(octave, name),
            pattern,
        }
    }
}

const FULL: FingeringPattern = FingeringPattern::full();
const EMPTY: FingeringPattern = FingeringPattern::empty();

/// Fingerings for the first two octaves
pub const STANDARD_NOTES: [NoteEntry; 12] = [
    NoteEntry::new(1, "C", FULL),
    NoteEntry::new(1, "D", FULL.with(Hole::Seven, Open)),
    NoteEntry::new(1, "E", FULL.with(Hole::Seven, Open).with(Hole::Six, Open)),
    NoteEntry::new(
        1,
        "F",
        FULL.with(Hole::Seven, Open)
            .with(Hole::Six, Open)
            .with(Hole::Five, Open),
    ),
    NoteEntry::new(1, "F#", FULL.with(Hole::Four, Open)),
    NoteEntry::new(
        1,
        "G",
        FULL.with(Hole::Seven, Open)
            .with(Hole::Six, Open)
            .with(Hole::Five, Open)
            .with(Hole::Four, Open),
    ),
    NoteEntry::new(1, "A", EMPTY.with(Hole::One, Closed).with(Hole::Two, Closed)),
    NoteEntry::new(
        1,
        "B",
        EMPTY
            .with(Hole::One, Closed)
            .with(Hole::Three, Closed)
            .with(Hole::Four, Closed),
    ),
    NoteEntry::new(1, "H", EMPTY.with(Hole::One, Closed)),
    NoteEntry::new(2, "C", EMPTY.with(Hole::Two, Closed)),
    NoteEntry::new(2, "D", EMPTY.with(Hole::Back, Open).with(Hole::Two, Closed)),
    NoteEntry::new(
        2,
        "E",
        FULL.with(Hole::Back, Half)
            .with(Hole::Six, Open)
            .with(Hole::Seven, Open),
    ),
];

/// Errors from narrowing a table to a subset of notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The id is not in the table
    UnknownNote(String),
    /// No ids were given
    Empty,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::UnknownNote(id) => write!(f, "Unknown note '{}'", id),
            SelectError::Empty => write!(f, "Note selection is empty"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Read-only collection of notes with unique ids, in a fixed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTable {
    entries: Vec<NoteEntry>,
}

impl NoteTable {
    /// The two-octave table every session starts from
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_NOTES.to_vec(),
        }
    }

    /// Look up the fingering for a note
    pub fn get(&self, id: &NoteId) -> Option<&FingeringPattern> {
        self.entries
            .iter()
            .find(|entry| entry.id == *id)
            .map(|entry| &entry.pattern)
    }

    /// Look up an entry by its written id (`1.F#`)
    pub fn find(&self, id: &str) -> Option<&NoteEntry> {
        let id = id.trim();
        self.entries.iter().find(|entry| entry.id.to_string() == id)
    }

    /// All note ids in table order
    pub fn ids(&self) -> Vec<NoteId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn entries(&self) -> &[NoteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrow the table to the given ids, keeping table order.
    /// Duplicate ids collapse to one entry.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<NoteTable, SelectError> {
        if ids.is_empty() {
            return Err(SelectError::Empty);
        }

        let mut wanted = Vec::with_capacity(ids.len());
        for id in ids {
            let entry = self
                .find(id.as_ref())
                .ok_or_else(|| SelectError::UnknownNote(id.as_ref().trim().to_string()))?;
            wanted.push(entry.id);
        }

        Ok(NoteTable {
            entries: self
                .entries
                .iter()
                .filter(|entry| wanted.contains(&entry.id))
                .copied()
                .collect(),
        })
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::standard()
    }
}
