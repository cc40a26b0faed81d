#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::Serialize;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use presets::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod engine;
mod error;
mod generator;
mod presets;
mod tile;
mod types;
mod view;

/// Validated board dimensions and mine count, `0 <= mines < rows * cols`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardConfig {
    size: Coord2,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines >= area(size) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Up-to-8 in-bounds neighbors of `coords`, row-major.
    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size)
    }
}

/// Grid of cells with a fixed shape and mine layout.
///
/// Only the `revealed` and `flagged` bits of each cell change after construction, and only
/// through [`Game`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    mines: Vec<Coord2>,
}

impl Board {
    /// Builds a board with mines at exactly the given coordinates. Repeated coordinates count
    /// once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        // dimensions first, the real mine count is only known after dedup
        let bounds = BoardConfig::new(size, 0)?;
        let mut mask: Array2<bool> = Array2::default(nd_index(size));
        let mut mines = Vec::with_capacity(mine_coords.len());

        for &coords in mine_coords {
            let coords = bounds.validate_coords(coords)?;
            let slot = &mut mask[nd_index(coords)];
            if !*slot {
                *slot = true;
                mines.push(coords);
            }
        }

        let mine_count = mines
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidMineCount)?;
        let config = BoardConfig::new(size, mine_count)?;
        Ok(Self::from_unique_mines(config, mines))
    }

    /// Caller guarantees `mines` is in bounds, duplicate free, and matches `config`.
    pub(crate) fn from_unique_mines(config: BoardConfig, mines: Vec<Coord2>) -> Self {
        debug_assert_eq!(mines.len(), usize::from(config.mines()));

        let mut cells: Array2<Cell> = Array2::default(nd_index(config.size()));
        for &coords in &mines {
            cells[nd_index(coords)].has_mine = true;
        }

        let (rows, cols) = config.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if cells[nd_index(coords)].has_mine {
                    continue;
                }
                let count = config
                    .neighbors(coords)
                    .filter(|&neighbor| cells[nd_index(neighbor)].has_mine)
                    .count();
                // at most 8 neighbors
                cells[nd_index(coords)].adjacent_mines = count as u8;
            }
        }

        Self {
            config,
            cells,
            mines,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cell_count()
    }

    /// Mine coordinates in placement order.
    pub fn mine_coords(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].has_mine
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.config.neighbors(coords)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd_index(coords)]
    }

    /// Reveals every mine that is still hidden, recording it in `changed`. Flags on mines are
    /// dropped since a revealed cell is never flagged. Returns how many flags were dropped.
    pub(crate) fn reveal_mines(&mut self, changed: &mut Vec<Coord2>) -> CellCount {
        let mut dropped_flags = 0;
        for &coords in &self.mines {
            let cell = &mut self.cells[nd_index(coords)];
            if cell.revealed {
                continue;
            }
            if cell.flagged {
                cell.flagged = false;
                dropped_flags += 1;
            }
            cell.revealed = true;
            changed.push(coords);
        }
        dropped_flags
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}

/// Result of a single player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Unchanged,
    Continue,
    Win,
    Loss,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

/// Merges outcomes of several reveals, a loss dominates a win.
impl BitOr for Outcome {
    type Output = Outcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use Outcome::*;
        match (self, rhs) {
            (Loss, _) => Loss,
            (_, Loss) => Loss,
            (Win, _) => Win,
            (_, Win) => Win,
            (Continue, _) => Continue,
            (_, Continue) => Continue,
            (Unchanged, Unchanged) => Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(BoardConfig::new((0, 5), 0), Err(GameError::InvalidDimensions));
        assert_eq!(BoardConfig::new((5, 0), 0), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(BoardConfig::new((2, 2), 4), Err(GameError::InvalidMineCount));
        assert_eq!(BoardConfig::new((2, 2), 9), Err(GameError::InvalidMineCount));
        assert!(BoardConfig::new((2, 2), 3).is_ok());
        assert!(BoardConfig::new((1, 1), 0).is_ok());
    }

    #[test]
    fn board_counts_adjacent_mines() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board[(1, 1)].adjacent_mines, 2);
        assert_eq!(board[(0, 1)].adjacent_mines, 1);
        assert_eq!(board[(0, 2)].adjacent_mines, 0);
        assert_eq!(board[(2, 0)].adjacent_mines, 0);
        assert!(board.contains_mine((2, 2)));
    }

    #[test]
    fn board_dedups_mine_coords() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.mine_coords(), &[(1, 1)]);
    }

    #[test]
    fn board_rejects_bad_mine_coords() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidMineCount)
        );
    }

    #[test]
    fn neighbors_stay_inside_the_config() {
        let config = BoardConfig::new((2, 3), 0).unwrap();

        assert_eq!(
            config.neighbors((1, 2)).collect::<Vec<_>>(),
            [(0, 1), (0, 2), (1, 1)]
        );
        assert_eq!(config.neighbors((0, 1)).count(), 5);
    }

    #[test]
    fn outcome_merge_prefers_loss() {
        use Outcome::*;

        assert_eq!(Unchanged | Continue, Continue);
        assert_eq!(Continue | Win, Win);
        assert_eq!(Win | Loss, Loss);
        assert_eq!(Unchanged | Unchanged, Unchanged);
    }
}
