use std::cell::Cell;
use std::io;
use std::time::Duration;

use flute_trainer::render::{Frame, LabelError, LabelRenderer};
use flute_trainer::session::{countdown, NotePicker, Outcome, SessionError};
use flute_trainer::{NoteTable, Session, SessionConfig, Surface, Wait};

/// Label renderer that echoes the label and counts calls
#[derive(Default)]
struct EchoLabel {
    calls: Cell<usize>,
}

impl LabelRenderer for EchoLabel {
    fn render(&self, label: &str) -> Result<String, LabelError> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("[{}]\n", label))
    }
}

/// Label renderer standing in for a host without figlet
struct MissingFiglet;

impl LabelRenderer for MissingFiglet {
    fn render(&self, _label: &str) -> Result<String, LabelError> {
        Err(LabelError::Unavailable {
            program: "figlet".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        })
    }
}

/// Surface that records frames and waits instead of sleeping
#[derive(Default)]
struct Recorder {
    frames: Vec<Frame>,
    announcements: Vec<String>,
    waits: Vec<Duration>,
    /// Cancel during the wait with this index
    cancel_at: Option<usize>,
}

impl Surface for Recorder {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn announce(&mut self, text: &str) -> io::Result<()> {
        self.announcements.push(text.to_string());
        Ok(())
    }

    fn wait(&mut self, duration: Duration) -> io::Result<Wait> {
        let index = self.waits.len();
        self.waits.push(duration);
        if self.cancel_at == Some(index) {
            Ok(Wait::Cancelled)
        } else {
            Ok(Wait::Elapsed)
        }
    }
}

fn label_of(frame: &Frame) -> String {
    frame.label.trim().to_string()
}

#[test]
fn half_second_session_shows_three_rounds() {
    let table = NoteTable::standard();
    let config = SessionConfig::new().rounds(1).start(0.5).step(0.1).stop(0.3);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(11)).unwrap();
    let mut recorder = Recorder::default();

    let outcome = session.run(&mut recorder).unwrap();

    assert_eq!(outcome, Outcome::Completed { rounds_played: 3 });
    assert_eq!(recorder.frames.len(), 3);

    let intervals: Vec<f64> = recorder.frames.iter().map(|f| f.header.interval).collect();
    assert_eq!(intervals[0], 0.5);
    assert!((intervals[1] - 0.4).abs() < 1e-9);
    assert!((intervals[2] - 0.3).abs() < 1e-9);
    assert_eq!(recorder.waits[0], Duration::from_millis(500));
}

#[test]
fn default_session_plays_sixty_five_rounds_without_repeats() {
    let table = NoteTable::standard();
    let label = EchoLabel::default();
    let mut session =
        Session::with_picker(SessionConfig::default(), &table, &label, NotePicker::seeded(3)).unwrap();
    let mut recorder = Recorder::default();

    let outcome = session.run(&mut recorder).unwrap();

    assert_eq!(outcome.rounds_played(), 65);
    assert_eq!(label.calls.get(), 65);

    let labels: Vec<String> = recorder.frames.iter().map(label_of).collect();
    for pair in labels.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn header_tracks_rounds_within_each_tier() {
    let table = NoteTable::standard();
    let config = SessionConfig::new().rounds(3).start(1.0).step(0.25).stop(0.5);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(8)).unwrap();
    let mut recorder = Recorder::default();

    session.run(&mut recorder).unwrap();

    let rounds: Vec<(u32, u32)> = recorder
        .frames
        .iter()
        .map(|f| (f.header.round, f.header.rounds))
        .collect();
    assert_eq!(rounds, vec![(0, 3), (1, 3), (2, 3), (0, 3), (1, 3), (2, 3)]);
    assert!(recorder.frames.iter().all(|f| f.header.step == 0.25));
}

#[test]
fn frames_show_matching_flute_for_label() {
    let table = NoteTable::standard().select(&["1.C", "2.D"]).unwrap();
    let config = SessionConfig::new().rounds(2).start(1.0).step(0.5).stop(0.0);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(2)).unwrap();
    let mut recorder = Recorder::default();

    session.run(&mut recorder).unwrap();

    // two notes with no repeats means strict alternation
    assert_eq!(recorder.frames.len(), 4);
    for frame in &recorder.frames {
        match label_of(frame).as_str() {
            "[1  C]" => assert!(!frame.flute.contains('○')),
            "[2  D]" => assert_eq!(frame.flute.matches('●').count(), 1),
            other => panic!("unexpected label {}", other),
        }
    }
}

#[test]
fn single_note_session_repeats_that_note() {
    let table = NoteTable::standard().select(&["1.G"]).unwrap();
    let config = SessionConfig::new().rounds(2).start(1.0).step(0.5).stop(0.0);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(0)).unwrap();
    let mut recorder = Recorder::default();

    let outcome = session.run(&mut recorder).unwrap();

    assert_eq!(outcome, Outcome::Completed { rounds_played: 4 });
    assert!(recorder.frames.iter().all(|f| label_of(f) == "[1  G]"));
}

#[test]
fn cancelling_stops_the_run() {
    let table = NoteTable::standard();
    let mut session = Session::with_picker(
        SessionConfig::default(),
        &table,
        EchoLabel::default(),
        NotePicker::seeded(4),
    )
    .unwrap();
    let mut recorder = Recorder {
        cancel_at: Some(2),
        ..Recorder::default()
    };

    let outcome = session.run(&mut recorder).unwrap();

    assert_eq!(outcome, Outcome::Cancelled { rounds_played: 3 });
    assert_eq!(recorder.frames.len(), 3);
}

#[test]
fn missing_figlet_fails_on_first_round() {
    let table = NoteTable::standard();
    let mut session = Session::with_picker(
        SessionConfig::default(),
        &table,
        MissingFiglet,
        NotePicker::seeded(4),
    )
    .unwrap();
    let mut recorder = Recorder::default();

    let err = session.run(&mut recorder).unwrap_err();

    assert!(matches!(err, SessionError::Label { .. }));
    assert!(recorder.frames.is_empty());
    assert!(recorder.waits.is_empty());
}

#[test]
fn invalid_settings_fail_before_any_round() {
    let table = NoteTable::standard();

    let zero_step = SessionConfig::new().step(0.0);
    assert!(Session::new(zero_step, &table, EchoLabel::default()).is_err());

    let inverted = SessionConfig::new().start(1.0).stop(2.0);
    assert!(Session::new(inverted, &table, EchoLabel::default()).is_err());
}

#[test]
fn countdown_then_session() {
    let table = NoteTable::standard();
    let config = SessionConfig::new().countdown(2).rounds(1).start(0.5).step(0.1).stop(0.3);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(6)).unwrap();
    let mut recorder = Recorder::default();

    assert_eq!(countdown(&mut recorder, config.countdown).unwrap(), Wait::Elapsed);
    session.run(&mut recorder).unwrap();

    assert_eq!(recorder.announcements, vec!["2 ...", "1 ..."]);
    assert_eq!(recorder.waits.len(), 2 + 3);
}

#[test]
fn countdown_can_be_cancelled() {
    let mut recorder = Recorder {
        cancel_at: Some(0),
        ..Recorder::default()
    };

    assert_eq!(countdown(&mut recorder, 3).unwrap(), Wait::Cancelled);
    assert_eq!(recorder.announcements, vec!["3 ..."]);
}

#[test]
fn tiny_step_session_starts_with_info_logging() {
    // the interval never shrinks at this step, so the schedule is endless
    log::set_max_level(log::LevelFilter::Info);

    let table = NoteTable::standard();
    let config = SessionConfig::new().start(2.0).step(1e-17).stop(0.7);
    let mut session =
        Session::with_picker(config, &table, EchoLabel::default(), NotePicker::seeded(9)).unwrap();
    let mut recorder = Recorder {
        cancel_at: Some(0),
        ..Recorder::default()
    };

    let outcome = session.run(&mut recorder).unwrap();

    assert_eq!(outcome, Outcome::Cancelled { rounds_played: 1 });
    assert_eq!(recorder.frames.len(), 1);
    assert_eq!(recorder.frames[0].header.interval, 2.0);
}
