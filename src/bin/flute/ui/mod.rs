//! Terminal surface for the practice session
//!
//! Draws rounds with ratatui and turns waits into input polls, so the learner
//! can stop at any time with Q, Esc, or Ctrl+C.

mod header;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flute_trainer::render::Frame as Round;
use flute_trainer::session::{Surface, Wait};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};

use header::render_header;

/// Longest single input poll, so an interrupt is noticed promptly
const POLL_SLICE: Duration = Duration::from_millis(100);

/// What is currently on screen
#[derive(Debug, Clone)]
enum Screen {
    Blank,
    /// Countdown lines so far
    Countdown(Vec<String>),
    /// A practice round
    Round(Round),
}

/// Session surface backed by a ratatui terminal
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    screen: Screen,
    /// Set from outside the event loop (SIGINT/SIGTERM)
    interrupted: Arc<AtomicBool>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            screen: Screen::Blank,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Treat this flag being set as a cancel
    pub fn interrupt_flag(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = interrupted;
        self
    }

    /// Redraw whatever is on screen
    fn draw(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal.draw(|frame| render(frame, screen))?;
        Ok(())
    }

    #[cfg(test)]
    fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn present(&mut self, round: &Round) -> io::Result<()> {
        // a new screen replaces the old one entirely
        self.terminal.clear()?;
        self.screen = Screen::Round(round.clone());
        self.draw()
    }

    fn announce(&mut self, text: &str) -> io::Result<()> {
        match &mut self.screen {
            Screen::Countdown(lines) => lines.push(text.to_string()),
            screen => *screen = Screen::Countdown(vec![text.to_string()]),
        }
        self.draw()
    }

    fn wait(&mut self, duration: Duration) -> io::Result<Wait> {
        // too far out to represent means no deadline at all
        let deadline = Instant::now().checked_add(duration);

        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return Ok(Wait::Cancelled);
            }

            let Some(timeout) = poll_timeout(deadline, Instant::now()) else {
                return Ok(Wait::Elapsed);
            };

            if !event::poll(timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && is_cancel(&key) => {
                    return Ok(Wait::Cancelled);
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }
}

/// How long to poll for input next, or `None` once the deadline has passed
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Option<Duration> {
    let Some(deadline) = deadline else {
        return Some(POLL_SLICE);
    };

    let remaining = deadline.saturating_duration_since(now);
    if remaining.is_zero() {
        None
    } else {
        Some(remaining.min(POLL_SLICE))
    }
}

/// Keys that end the session
fn is_cancel(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn render(frame: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Blank => {}
        Screen::Countdown(lines) => {
            let text = lines.join("\n");
            frame.render_widget(Paragraph::new(text), frame.area());
        }
        Screen::Round(round) => render_round(frame, round),
    }
}

fn render_round(frame: &mut Frame, round: &Round) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Label + flute
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &round.header);
    frame.render_widget(Paragraph::new(round.body()), chunks[2]);

    let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}
