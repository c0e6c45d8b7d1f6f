//! Trainer - application builder and runner

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use flute_trainer::{
    render::Glyphs,
    session::{countdown, NotePicker, Outcome},
    Figlet, FluteRenderer, NoteTable, Session, SessionConfig, Wait,
};
use rand::rngs::StdRng;

use super::ui::TerminalSurface;

/// Main application builder
pub struct Trainer {
    config: SessionConfig,
    notes: Vec<String>,
    figlet: Figlet,
    glyphs: Glyphs,
    seed: Option<u64>,
}

impl Trainer {
    /// Create a trainer with default settings
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            notes: Vec::new(),
            figlet: Figlet::new(),
            glyphs: Glyphs::UNICODE,
            seed: None,
        }
    }

    /// Set the tempo settings
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Practice only these note ids (empty means all)
    pub fn notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Set the label renderer
    pub fn figlet(mut self, figlet: Figlet) -> Self {
        self.figlet = figlet;
        self
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The note table for this run
    fn table(&self) -> EyreResult<NoteTable> {
        let table = NoteTable::standard();
        if self.notes.is_empty() {
            return Ok(table);
        }
        table
            .select(self.notes.as_slice())
            .wrap_err("invalid --notes selection")
    }

    fn picker(&self) -> NotePicker<StdRng> {
        match self.seed {
            Some(seed) => NotePicker::seeded(seed),
            None => NotePicker::from_entropy(),
        }
    }

    /// Print every note with its one-line fingering
    pub fn list(&self) -> EyreResult<()> {
        let flute = FluteRenderer::new(self.glyphs);
        for entry in self.table()?.entries() {
            println!("{:<5} {}", entry.id.to_string(), flute.compact(&entry.pattern));
        }
        Ok(())
    }

    /// Run the application (takes over the terminal until the session ends)
    pub fn run(self) -> EyreResult<()> {
        // Everything that can be rejected is checked before the screen changes
        let table = self.table()?;
        let mut session = Session::with_picker(self.config, &table, &self.figlet, self.picker())
            .wrap_err("invalid session settings")?
            .flute_renderer(FluteRenderer::new(self.glyphs));

        // raw mode swallows Ctrl+C as a key; this catches signals sent from outside
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .wrap_err("failed to install interrupt handler")?;

        let terminal = ratatui::init();
        let mut surface = TerminalSurface::new(terminal).interrupt_flag(interrupted);
        let result = play(&mut surface, &mut session, self.config.countdown);
        ratatui::restore();

        match result? {
            Some(outcome) => log::info!("finished: {:?}", outcome),
            None => log::info!("cancelled during countdown"),
        }
        Ok(())
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Countdown, then the session. `None` if cancelled before the first round.
fn play(
    surface: &mut TerminalSurface<impl ratatui::backend::Backend>,
    session: &mut Session<'_, &Figlet, StdRng>,
    seconds: u32,
) -> EyreResult<Option<Outcome>> {
    if countdown(surface, seconds).wrap_err("terminal error during countdown")? == Wait::Cancelled {
        return Ok(None);
    }

    let outcome = session.run(surface).wrap_err("practice session failed")?;
    Ok(Some(outcome))
}
