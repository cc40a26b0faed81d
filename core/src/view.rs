use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Snapshot of everything a renderer may show, hidden information stays hidden until the game
/// is over.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub mines_left: isize,
    pub state: GameState,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_game(game: &Game) -> Self {
        let expose = game.is_finished();
        Self {
            size: game.size(),
            mine_count: game.total_mines(),
            mines_left: game.mines_left(),
            state: game.state(),
            cells: game.board().cells().map(|&cell| CellView::new(cell, expose)),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(nd_index(coords)).copied()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &CellView>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }
}
