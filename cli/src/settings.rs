use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sweeper_core::*;

/// Loads a presets table from a TOML file, or the built-in table without one.
pub fn load_presets(path: Option<&Path>) -> Result<Presets> {
    let Some(path) = path else {
        return Ok(Presets::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read presets from {}", path.display()))?;
    let presets = parse_presets(&text)
        .with_context(|| format!("Invalid presets file {}", path.display()))?;
    log::debug!("Loaded presets from {}", path.display());
    Ok(presets)
}

pub fn parse_presets(text: &str) -> Result<Presets> {
    Ok(toml::from_str(text)?)
}

/// Board size and mines, either explicit or looked up from a preset.
pub fn board_config(
    presets: &Presets,
    size: &str,
    difficulty: Difficulty,
    custom: Option<(Coord, Coord, CellCount)>,
) -> Result<BoardConfig> {
    match custom {
        Some((rows, cols, mines)) => BoardConfig::new((rows, cols), mines)
            .with_context(|| format!("Cannot play {rows}x{cols} with {mines} mines")),
        None => presets
            .resolve(size, difficulty)
            .with_context(|| format!("Cannot play preset {size} on {difficulty}")),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Placement {
    /// Draw random cells until enough mines are placed
    Rejection,
    /// Shuffle all cells and take the first ones
    Shuffle,
}

/// Seeds for consecutive games, reproducible when a base seed is given.
#[derive(Clone, Debug)]
pub struct SeedSource {
    base: Option<u64>,
    games: u64,
}

impl SeedSource {
    pub fn new(base: Option<u64>) -> Self {
        Self { base, games: 0 }
    }

    pub fn next_seed(&mut self) -> u64 {
        let seed = match self.base {
            Some(base) => base.wrapping_add(self.games),
            None => rand::random(),
        };
        self.games += 1;
        seed
    }
}

/// Generator picked on the command line.
#[derive(Copy, Clone, Debug)]
pub struct Generator {
    pub placement: Placement,
    pub seed: u64,
}

impl BoardGenerator for Generator {
    fn generate(self, config: BoardConfig) -> Board {
        match self.placement {
            Placement::Rejection => RandomBoardGenerator::new(self.seed).generate(config),
            Placement::Shuffle => ShuffleBoardGenerator::new(self.seed).generate(config),
        }
    }
}
