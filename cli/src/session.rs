use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use sweeper_core::*;

use crate::command::{Command, HELP};
use crate::render::TextBoard;
use crate::settings::{Generator, Placement, SeedSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented JSON events for `--json`.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    NewGame { seed: u64, board: &'a BoardView },
    Board { board: &'a BoardView },
    Move { command: &'a str, result: &'a MoveResult },
    Error { message: String },
}

/// One player at the terminal, possibly playing several games in a row.
pub struct Session<W> {
    game: Game,
    config: BoardConfig,
    placement: Placement,
    seeds: SeedSource,
    json: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        config: BoardConfig,
        placement: Placement,
        mut seeds: SeedSource,
        json: bool,
        out: W,
    ) -> Self {
        let seed = seeds.next_seed();
        let game = Game::new_game(config, Generator { placement, seed });
        log::info!("Seed {}", seed);
        Self {
            game,
            config,
            placement,
            seeds,
            json,
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn start(&mut self) -> Result<()> {
        self.show()
    }

    /// Parses and runs a line of input. Bad input is reported to the player, only I/O errors
    /// end the session.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        match line.parse::<Command>() {
            Ok(command) => self.handle(command, line.trim()),
            Err(err) => {
                log::debug!("Rejected input {:?}: {:#}", line, err);
                self.report(format!("{err:#}"))?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn handle(&mut self, command: Command, text: &str) -> Result<Flow> {
        let result = match command {
            Command::Reveal(coords) => self.game.reveal(coords),
            Command::Flag(coords) => self.game.toggle_flag(coords),
            Command::Chord(coords) => self.game.chord(coords),
            Command::New => {
                self.new_game()?;
                return Ok(Flow::Continue);
            }
            Command::Show => {
                self.show()?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(result) => self.after_move(text, &result)?,
            Err(err) => {
                log::warn!("{:?} failed: {}", command, err);
                self.report(err.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn new_game(&mut self) -> Result<()> {
        let seed = self.seeds.next_seed();
        let generator = Generator {
            placement: self.placement,
            seed,
        };
        let view = self.game.reset(self.config, generator);
        log::info!("Seed {}", seed);

        if self.json {
            self.emit(&Event::NewGame { seed, board: &view })
        } else {
            writeln!(self.out, "{}", TextBoard(&view))?;
            Ok(())
        }
    }

    fn show(&mut self) -> Result<()> {
        let view = self.game.view();
        if self.json {
            self.emit(&Event::Board { board: &view })
        } else {
            writeln!(self.out, "{}", TextBoard(&view))?;
            Ok(())
        }
    }

    fn after_move(&mut self, text: &str, result: &MoveResult) -> Result<()> {
        log::debug!("{} -> {:?}, {} cells changed", text, result.outcome, result.changed.len());

        if self.json {
            return self.emit(&Event::Move {
                command: text,
                result,
            });
        }

        if result.outcome.has_update() {
            self.show()
        } else {
            writeln!(self.out, "nothing happens")?;
            Ok(())
        }
    }

    fn report(&mut self, message: String) -> Result<()> {
        if self.json {
            self.emit(&Event::Error { message })
        } else {
            writeln!(self.out, "error: {message}")?;
            Ok(())
        }
    }

    fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        Ok(())
    }
}
