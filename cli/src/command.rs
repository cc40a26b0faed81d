use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2};

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   flag or unflag a cell
  c ROW COL   reveal around a number whose flags are all placed
  new         start over with the same settings
  show        print the board again
  help        print this help
  quit        leave";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Chord(Coord2),
    New,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("Empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "c" | "chord" => Self::Chord(parse_coords(&mut words)?),
            "n" | "new" => Self::New,
            "s" | "show" => Self::Show,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command {other:?}, try help"),
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected {extra:?} after {verb}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parse_coord(words.next(), "row")?;
    let col = parse_coord(words.next(), "column")?;
    Ok((row, col))
}

fn parse_coord(word: Option<&str>, name: &str) -> anyhow::Result<Coord> {
    let word = word.with_context(|| format!("Missing {name}"))?;
    word.parse()
        .with_context(|| format!("Invalid {name} {word:?}"))
}
