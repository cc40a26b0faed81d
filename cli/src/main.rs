use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{CellCount, Coord, Difficulty};

use crate::session::{Flow, Session};
use crate::settings::{Placement, SeedSource};

mod command;
mod render;
mod session;
mod settings;

/// Play minesweeper in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, after_help = command::HELP)]
struct Cli {
    /// Size preset label, such as 8x8 or 16x30
    #[arg(long, default_value = "8x8")]
    size: String,

    /// Difficulty within the size preset: easy, medium or hard
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Custom number of rows, overrides the preset
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<Coord>,

    /// Custom number of columns, overrides the preset
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<Coord>,

    /// Custom number of mines, overrides the preset
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<CellCount>,

    /// TOML file replacing the built-in presets
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Seed for the first game, later games use the following seeds
    #[arg(long)]
    seed: Option<u64>,

    /// How mines are placed
    #[arg(long, value_enum, default_value_t = Placement::Rejection)]
    placement: Placement,

    /// Print JSON events instead of a text board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Cli {
    fn custom_size(&self) -> Option<(Coord, Coord, CellCount)> {
        Some((self.rows?, self.cols?, self.mines?))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // stdout carries the board, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_max_level(cli.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Could not install the logger")?;

    let presets = settings::load_presets(cli.presets.as_deref())?;
    let config = settings::board_config(&presets, &cli.size, cli.difficulty, cli.custom_size())?;
    log::info!(
        "Playing {}x{} with {} mines",
        config.rows(),
        config.cols(),
        config.mines()
    );

    let mut session = Session::new(
        config,
        cli.placement,
        SeedSource::new(cli.seed),
        cli.json,
        io::stdout().lock(),
    );
    session.start()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if session.handle_line(&line)? == Flow::Quit {
            break;
        }
    }

    log::info!("Session over, last game {:?}", session.game().state());
    Ok(())
}
