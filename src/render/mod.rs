// Purpose - turning notes into text for the screen

pub mod flute;
pub mod frame;
pub mod label;

pub use flute::{FluteRenderer, Glyphs};
pub use frame::{Frame, Header};
pub use label::{Figlet, LabelError, LabelRenderer};
