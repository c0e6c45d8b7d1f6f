//! Round scheduler - the shrinking-interval practice loop
//!
//! A session plays `rounds` notes at each interval, then shortens the
//! interval by `step`. It ends as soon as the interval reaches `stop`:
//!
//!   start, start, ... (rounds times), start - step, ... , > stop
//!
//! The check happens after the decrement, so the tier whose interval is at or
//! below `stop` is never played. The interval is decremented in place rather
//! than recomputed from the tier number, so float rounding accumulates the
//! same way on every run.

use std::time::Duration;

use super::config::{ConfigError, SessionConfig};
use crate::fingering::NoteId;

/// Whether the schedule still has rounds to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// Mutable state of one run
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    /// Current interval in seconds
    pub interval: f64,
    /// Rounds played at the current interval
    pub round: u32,
    /// Note shown in the previous round
    pub last_note: Option<NoteId>,
}

/// One round to be played
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds to hold this round on screen
    pub interval: f64,
    /// Rounds already played at this interval
    pub round: u32,
}

impl Tick {
    /// Interval as a sleep duration (negative or NaN become zero)
    pub fn duration(&self) -> Duration {
        if self.interval.is_nan() || self.interval <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.interval).unwrap_or(Duration::MAX)
    }
}

/// Round/interval state machine
///
/// Iterating a schedule yields every round that will be played, without
/// waiting, which is how the session loop consumes it.
#[derive(Debug, Clone)]
pub struct Schedule {
    step: f64,
    stop: f64,
    rounds: u32,
    state: ScheduleState,
    phase: Phase,
}

impl Schedule {
    /// Start a schedule; fails if the settings could never terminate cleanly
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            step: config.step,
            stop: config.stop,
            rounds: config.rounds,
            state: ScheduleState {
                interval: config.start,
                round: 0,
                last_note: None,
            },
            phase: Phase::Running,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The round about to be played, if any
    pub fn current(&self) -> Option<Tick> {
        match self.phase {
            Phase::Running => Some(Tick {
                interval: self.state.interval,
                round: self.state.round,
            }),
            Phase::Terminated => None,
        }
    }

    /// Remember the note shown this round
    pub fn record(&mut self, note: NoteId) {
        self.state.last_note = Some(note);
    }

    /// Finish the current round and move to the next one
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Terminated {
            return self.phase;
        }

        self.state.round += 1;
        if self.state.round >= self.rounds {
            self.state.round = 0;
            self.state.interval -= self.step;
        }

        if self.state.interval <= self.stop {
            self.phase = Phase::Terminated;
        }

        self.phase
    }
}

impl Iterator for Schedule {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let tick = self.current()?;
        self.advance();
        Some(tick)
    }
}
