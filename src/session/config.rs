//! Session configuration and construction-time validation

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fingering::table::SelectError;

/// Tempo settings for one practice session
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Seconds counted down before the first round
    pub countdown: u32,
    /// Rounds played at each interval before it shrinks
    pub rounds: u32,
    /// First interval between notes (seconds)
    pub start: f64,
    /// Amount the interval shrinks per tier (seconds)
    pub step: f64,
    /// Interval at or below which the session ends (seconds)
    pub stop: f64,
}

impl SessionConfig {
    pub const DEFAULT_COUNTDOWN: u32 = 3;
    pub const DEFAULT_ROUNDS: u32 = 5;
    pub const DEFAULT_START: f64 = 2.0;
    pub const DEFAULT_STEP: f64 = 0.1;
    pub const DEFAULT_STOP: f64 = 0.7;

    pub fn new() -> Self {
        Self {
            countdown: Self::DEFAULT_COUNTDOWN,
            rounds: Self::DEFAULT_ROUNDS,
            start: Self::DEFAULT_START,
            step: Self::DEFAULT_STEP,
            stop: Self::DEFAULT_STOP,
        }
    }

    pub fn countdown(mut self, seconds: u32) -> Self {
        self.countdown = seconds;
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn start(mut self, seconds: f64) -> Self {
        self.start = seconds;
        self
    }

    pub fn step(mut self, seconds: f64) -> Self {
        self.step = seconds;
        self
    }

    pub fn stop(mut self, seconds: f64) -> Self {
        self.stop = seconds;
        self
    }

    /// Countdown length as a duration
    pub fn countdown_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.countdown))
    }

    /// Check the interval settings; a session must not start otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("start", self.start), ("step", self.step), ("stop", self.stop)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step: self.step });
        }

        if self.start < self.stop {
            return Err(ConfigError::StartBelowStop {
                start: self.start,
                stop: self.stop,
            });
        }

        if self.stop < 0.0 {
            return Err(ConfigError::NegativeStop { stop: self.stop });
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid session settings
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Step must shrink the interval
    NonPositiveStep { step: f64 },
    /// The session would end before it starts
    StartBelowStop { start: f64, stop: f64 },
    /// Intervals are sleep durations and cannot go negative
    NegativeStop { stop: f64 },
    /// NaN or infinite setting
    NonFinite { name: &'static str, value: f64 },
    /// Bad practice note selection
    Notes(SelectError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveStep { step } => {
                write!(f, "Step may not be <= 0 (got {})", step)
            }
            ConfigError::StartBelowStop { start, stop } => {
                write!(f, "Start may not be less than stop (start {}, stop {})", start, stop)
            }
            ConfigError::NegativeStop { stop } => {
                write!(f, "Stop may not be negative (got {})", stop)
            }
            ConfigError::NonFinite { name, value } => {
                write!(f, "{} must be a finite number of seconds (got {})", name, value)
            }
            ConfigError::Notes(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Notes(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SelectError> for ConfigError {
    fn from(err: SelectError) -> Self {
        ConfigError::Notes(err)
    }
}
