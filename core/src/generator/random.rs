use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Purely random placement by rejection sampling: draw a `(row, col)` pair and keep it unless it
/// already holds a mine.
///
/// Expected draws grow quickly as density approaches 100%, see [`ShuffleBoardGenerator`] for
/// dense boards.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        let (rows, cols) = config.size();
        let mut mask: Array2<bool> = Array2::default(nd_index(config.size()));
        let mut mines = Vec::with_capacity(config.mines().into());
        let mut draws: u64 = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines.len() < usize::from(config.mines()) {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            draws += 1;
            let slot = &mut mask[nd_index(coords)];
            if !*slot {
                *slot = true;
                mines.push(coords);
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board in {} draws, seed {}",
            config.mines(),
            rows,
            cols,
            draws,
            self.seed
        );
        Board::from_unique_mines(config, mines)
    }
}
