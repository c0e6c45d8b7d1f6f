//! Practice session - picks notes, renders them, and paces the rounds
//!
//! A [`Session`] owns everything a run needs except the screen. The screen is
//! a [`Surface`]: something that can show a frame and wait for a while,
//! reporting whether the learner cancelled during the wait.

pub mod config;
pub mod picker;
pub mod scheduler;

use std::fmt;
use std::io;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;

pub use config::{ConfigError, SessionConfig};
pub use picker::{pick_unduplicated, NotePicker};
pub use scheduler::{Phase, Schedule, ScheduleState, Tick};

use crate::fingering::table::SelectError;
use crate::fingering::{NoteId, NoteTable};
use crate::render::{FluteRenderer, Frame, Header, LabelError, LabelRenderer};

/// How a wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// The full duration passed
    Elapsed,
    /// The learner asked to stop
    Cancelled,
}

/// Where frames are shown
pub trait Surface {
    /// Clear the screen and show a round
    fn present(&mut self, frame: &Frame) -> io::Result<()>;

    /// Show a line of the countdown before the first round
    fn announce(&mut self, text: &str) -> io::Result<()>;

    /// Block for `duration` unless cancelled first
    fn wait(&mut self, duration: Duration) -> io::Result<Wait>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        (**self).present(frame)
    }

    fn announce(&mut self, text: &str) -> io::Result<()> {
        (**self).announce(text)
    }

    fn wait(&mut self, duration: Duration) -> io::Result<Wait> {
        (**self).wait(duration)
    }
}

/// Count down `seconds` before the session, one line per second
pub fn countdown<S: Surface + ?Sized>(surface: &mut S, seconds: u32) -> io::Result<Wait> {
    for remaining in (1..=seconds).rev() {
        surface.announce(&format!("{} ...", remaining))?;
        if surface.wait(Duration::from_secs(1))? == Wait::Cancelled {
            return Ok(Wait::Cancelled);
        }
    }
    Ok(Wait::Elapsed)
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The interval reached the stop threshold
    Completed { rounds_played: u32 },
    /// The learner cancelled
    Cancelled { rounds_played: u32 },
}

impl Outcome {
    pub fn rounds_played(&self) -> u32 {
        match *self {
            Outcome::Completed { rounds_played } | Outcome::Cancelled { rounds_played } => {
                rounds_played
            }
        }
    }
}

/// Failures while a session is running
#[derive(Debug)]
pub enum SessionError {
    /// The note label could not be rendered
    Label { note: NoteId, source: LabelError },
    /// The screen could not be drawn or read
    Surface(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Label { note, source } => {
                write!(f, "Failed to render label for {}: {}", note, source)
            }
            SessionError::Surface(err) => write!(f, "Display error: {}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Label { source, .. } => Some(source),
            SessionError::Surface(err) => Some(err),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Surface(err)
    }
}

/// One practice run over a note table
pub struct Session<'a, L, R = StdRng> {
    config: SessionConfig,
    schedule: Schedule,
    notes: &'a NoteTable,
    ids: Vec<NoteId>,
    label: L,
    flute: FluteRenderer,
    picker: NotePicker<R>,
}

impl<'a, L: LabelRenderer> Session<'a, L, StdRng> {
    /// Validate the settings and prepare a run with an OS-seeded picker
    pub fn new(config: SessionConfig, notes: &'a NoteTable, label: L) -> Result<Self, ConfigError> {
        Self::with_picker(config, notes, label, NotePicker::from_entropy())
    }
}

impl<'a, L: LabelRenderer, R: Rng> Session<'a, L, R> {
    /// Validate the settings and prepare a run with the given picker
    pub fn with_picker(
        config: SessionConfig,
        notes: &'a NoteTable,
        label: L,
        picker: NotePicker<R>,
    ) -> Result<Self, ConfigError> {
        let schedule = Schedule::new(&config)?;
        if notes.is_empty() {
            return Err(SelectError::Empty.into());
        }

        Ok(Self {
            config,
            schedule,
            notes,
            ids: notes.ids(),
            label,
            flute: FluteRenderer::default(),
            picker,
        })
    }

    /// Draw flutes with a different renderer
    pub fn flute_renderer(mut self, flute: FluteRenderer) -> Self {
        self.flute = flute;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Build the frame for a note at a given round
    pub fn frame(&self, note: &NoteId, tick: Tick) -> Result<Frame, SessionError> {
        let label = self
            .label
            .render(&note.label())
            .map_err(|source| SessionError::Label {
                note: *note,
                source,
            })?;

        // ids always come from the table, so the lookup cannot miss
        let flute = self
            .notes
            .get(note)
            .map(|pattern| self.flute.render(pattern))
            .unwrap_or_default();

        let header = Header {
            step: self.config.step,
            interval: tick.interval,
            round: tick.round,
            rounds: self.config.rounds,
        };

        Ok(Frame::compose(header, &label, &flute))
    }

    /// Play rounds until the interval reaches the stop threshold or the
    /// learner cancels
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Outcome, SessionError> {
        let mut schedule = self.schedule.clone();

        if self.ids.len() == 1 {
            log::warn!("only one note selected; it will repeat every round");
        }
        log::info!(
            "session: {} notes, {} rounds per interval, {:.2}s -> {:.2}s by {}s",
            self.ids.len(),
            self.config.rounds,
            self.config.start,
            self.config.stop,
            self.config.step
        );

        let mut rounds_played = 0;

        while let Some(tick) = schedule.current() {
            let last = schedule.state().last_note;
            let Some(&note) = self.picker.pick(&self.ids, last.as_ref()) else {
                break;
            };
            schedule.record(note);

            let frame = self.frame(&note, tick)?;
            surface.present(&frame)?;
            log::debug!(
                "round {}/{} at {:.3}s: {}",
                tick.round,
                self.config.rounds,
                tick.interval,
                note
            );

            let wait = surface.wait(tick.duration())?;
            rounds_played += 1;

            if wait == Wait::Cancelled {
                log::info!("session cancelled after {} rounds", rounds_played);
                return Ok(Outcome::Cancelled { rounds_played });
            }

            schedule.advance();
        }

        log::info!("session complete after {} rounds", rounds_played);
        Ok(Outcome::Completed { rounds_played })
    }
}
