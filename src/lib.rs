pub mod fingering; // Hole states, fingering patterns, and the note table
pub mod render; // Flute diagrams, block-letter labels, frame layout
pub mod session; // Round scheduling and the practice loop

pub use fingering::{FingeringPattern, HoleState, NoteId, NoteTable};
pub use render::{Figlet, FluteRenderer, Frame, LabelRenderer};
pub use session::{Outcome, Session, SessionConfig, Surface, Wait};
