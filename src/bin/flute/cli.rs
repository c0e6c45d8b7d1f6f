//! Command line

use std::path::PathBuf;

use clap::Parser;
use flute_trainer::render::label::{DEFAULT_FONT, DEFAULT_PROGRAM};
use flute_trainer::SessionConfig;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(name = "flute", version, about = "Learn to play the flute")]
pub struct Cli {
    #[clap(long, value_name = "SECONDS", default_value_t = SessionConfig::DEFAULT_COUNTDOWN, help = "Set the start count down")]
    pub countdown: u32,

    #[clap(long, value_name = "ROUNDS", default_value_t = SessionConfig::DEFAULT_ROUNDS, help = "Set the number of rounds per interval")]
    pub rounds: u32,

    #[clap(long, value_name = "SECONDS", default_value_t = SessionConfig::DEFAULT_START, allow_negative_numbers = true, help = "Set the start interval")]
    pub start: f64,

    #[clap(long, value_name = "SECONDS", default_value_t = SessionConfig::DEFAULT_STEP, allow_negative_numbers = true, help = "Set the step")]
    pub step: f64,

    #[clap(long, value_name = "SECONDS", default_value_t = SessionConfig::DEFAULT_STOP, allow_negative_numbers = true, help = "Set the stop interval")]
    pub stop: f64,

    #[clap(
        long,
        value_name = "IDS",
        value_delimiter = ',',
        help = "Practice only these notes, e.g. 1.C,1.D,2.E (default: all)"
    )]
    pub notes: Vec<String>,

    #[clap(long, value_name = "NAME", default_value = DEFAULT_FONT, help = "figlet font for the note name")]
    pub font: String,

    #[clap(long, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM, help = "Text-art program to run instead of figlet")]
    pub figlet: String,

    #[clap(long, help = "Seed the note picker for a repeatable session")]
    pub seed: Option<u64>,

    #[clap(long, help = "Draw holes with ASCII characters")]
    pub ascii: bool,

    #[clap(long, help = "Print every note with its fingering and exit")]
    pub list: bool,

    #[clap(long, value_name = "PATH", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[clap(long, value_name = "LEVEL", default_value = "info", help = "Log level when --log-file is set")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Tempo settings from the command line (not yet validated)
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .countdown(self.countdown)
            .rounds(self.rounds)
            .start(self.start)
            .step(self.step)
            .stop(self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let cli = Cli::parse_from(["flute"]);
        assert_eq!(cli.session_config(), SessionConfig::default());
        assert!(cli.notes.is_empty());
        assert_eq!(cli.font, "big");
        assert_eq!(cli.figlet, "figlet");
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(!cli.list);
    }

    #[test]
    fn tempo_flags() {
        let cli = Cli::parse_from([
            "flute", "--rounds", "1", "--start", "0.5", "--step", "0.1", "--stop", "0.3",
            "--countdown", "0",
        ]);
        let config = cli.session_config();
        assert_eq!(config.rounds, 1);
        assert_eq!(config.start, 0.5);
        assert_eq!(config.step, 0.1);
        assert_eq!(config.stop, 0.3);
        assert_eq!(config.countdown, 0);
    }

    #[test]
    fn notes_split_on_commas() {
        let cli = Cli::parse_from(["flute", "--notes", "1.C,1.F#,2.E"]);
        assert_eq!(cli.notes, vec!["1.C", "1.F#", "2.E"]);
    }

    #[test]
    fn negative_step_parses_so_validation_can_reject_it() {
        let cli = Cli::parse_from(["flute", "--step", "-0.1"]);
        assert!(cli.session_config().validate().is_err());
    }

    #[test]
    fn rejects_fractional_rounds() {
        assert!(Cli::try_parse_from(["flute", "--rounds", "1.5"]).is_err());
    }
}
