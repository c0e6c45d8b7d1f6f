//! Display frame - header, note label, and flute laid out for one round
//!
//! The label is centered over the flute body: the flute sits 14 columns in,
//! and the label is shifted so its middle lands near column 17.

use std::fmt;

/// Columns the flute diagram is shifted right
pub const FLUTE_MARGIN: usize = 14;

/// Column the label is centered on
pub const LABEL_CENTER: usize = 17;

/// Status line shown above every round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    /// Configured interval decrement (seconds)
    pub step: f64,
    /// Interval for this round (seconds)
    pub interval: f64,
    /// Rounds already played at this interval
    pub round: u32,
    /// Rounds per interval tier
    pub rounds: u32,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " Step: {:.2} | Interval: {:.2} | Round {}/{}",
            self.step, self.interval, self.round, self.rounds
        )
    }
}

/// Everything shown on screen for one round
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub header: Header,
    /// Centered block-letter note label
    pub label: String,
    /// Indented flute diagram
    pub flute: String,
}

impl Frame {
    /// Lay out a raw label and flute diagram under a header
    pub fn compose(header: Header, label: &str, flute: &str) -> Self {
        let offset = LABEL_CENTER.saturating_sub(max_width(label) / 2);

        Self {
            header,
            label: indent(label, offset),
            flute: indent(flute, FLUTE_MARGIN),
        }
    }

    /// Label and flute as one block, label on top
    pub fn body(&self) -> String {
        let mut body = String::with_capacity(self.label.len() + self.flute.len() + 1);
        body.push_str(&self.label);
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        body.push_str(&self.flute);
        body
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.header, self.body())
    }
}

/// Width in characters of the longest line
pub fn max_width(text: &str) -> usize {
    text.lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Prefix every non-blank line with `width` spaces, keeping line endings
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(text.len() + width * 16);

    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }

    out
}
