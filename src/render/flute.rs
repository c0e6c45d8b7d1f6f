//! Fingering renderer - draws a fingering pattern as an ASCII flute
//!
//! ```text
//!   _
//!  / \
//! /   \
//! ││_││
//! )───(
//! ) ● (      back hole
//! │   │
//! │ ● │      hole 1
//! │ ● │      ...
//! │ ○ │      hole 7
//! )   (
//! ^^^^^
//! ```

use crate::fingering::{FingeringPattern, Hole, HoleState};

/// Characters used to draw each hole state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub closed: char,
    pub half: char,
    pub open: char,
}

impl Glyphs {
    /// Filled / half-filled / empty circles
    pub const UNICODE: Glyphs = Glyphs {
        closed: '●',
        half: '◐',
        open: '○',
    };

    /// Plain ASCII fallback
    pub const ASCII: Glyphs = Glyphs {
        closed: '#',
        half: '/',
        open: 'o',
    };

    pub const fn glyph(&self, state: HoleState) -> char {
        match state {
            HoleState::Closed => self.closed,
            HoleState::Half => self.half,
            HoleState::Open => self.open,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

const MOUTHPIECE: [&str; 5] = ["  _", " / \\", "/   \\", "││_││", ")───("];
const FOOT: [&str; 2] = [")   (", "^^^^^"];

/// Renders fingering patterns into multi-line flute diagrams
#[derive(Debug, Clone, Copy, Default)]
pub struct FluteRenderer {
    glyphs: Glyphs,
}

impl FluteRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    /// Full diagram, one line per row, without a trailing newline
    pub fn render(&self, pattern: &FingeringPattern) -> String {
        let mut lines: Vec<String> = MOUTHPIECE.iter().map(|l| l.to_string()).collect();

        lines.push(format!(") {} (", self.glyph(pattern, Hole::Back)));
        lines.push("│   │".to_string());
        for hole in &Hole::ALL[1..] {
            lines.push(format!("│ {} │", self.glyph(pattern, *hole)));
        }

        lines.extend(FOOT.iter().map(|l| l.to_string()));
        lines.join("\n")
    }

    /// One-line form: back hole, a space, then holes 1..7
    pub fn compact(&self, pattern: &FingeringPattern) -> String {
        let mut line = String::with_capacity(4 * 9);
        line.push(self.glyph(pattern, Hole::Back));
        line.push(' ');
        for hole in &Hole::ALL[1..] {
            line.push(self.glyph(pattern, *hole));
        }
        line
    }

    fn glyph(&self, pattern: &FingeringPattern, hole: Hole) -> char {
        self.glyphs.glyph(pattern.hole(hole))
    }
}
