use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Picks exactly `mines` distinct cells with a partial Fisher-Yates shuffle of all cell indices.
///
/// Runs in a fixed number of steps regardless of density.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleBoardGenerator {
    seed: u64,
}

impl ShuffleBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffleBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        let cols = CellCount::from(config.cols());
        let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = indices.partial_shuffle(&mut rng, config.mines().into());

        // indices are below rows * cols, so both parts fit in a `Coord`
        let mines = picked
            .iter()
            .map(|&index| ((index / cols) as Coord, (index % cols) as Coord))
            .collect();

        log::debug!(
            "Shuffled {} mines onto {}x{} board, seed {}",
            config.mines(),
            config.rows(),
            config.cols(),
            self.seed
        );
        Board::from_unique_mines(config, mines)
    }
}
