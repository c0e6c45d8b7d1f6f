//! flute - terminal flute fingering trainer
//!
//! Run with: cargo run -- --start 2.0 --step 0.1 --stop 0.7

mod app;
mod cli;
mod ui;

use std::fs::OpenOptions;

use app::Trainer;
use clap::Parser;
use cli::Cli;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use flute_trainer::{render::Glyphs, Figlet};
use log::LevelFilter;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli)?;

    let trainer = Trainer::new()
        .config(cli.session_config())
        .notes(cli.notes.clone())
        .figlet(Figlet::new().program(&cli.figlet).font(&cli.font))
        .glyphs(if cli.ascii { Glyphs::ASCII } else { Glyphs::UNICODE })
        .seed(cli.seed);

    if cli.list {
        return trainer.list();
    }

    trainer.run()
}

/// The terminal belongs to the trainer, so logs only go to a file
fn init_logging(cli: &Cli) -> EyreResult<()> {
    let Some(path) = &cli.log_file else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}
