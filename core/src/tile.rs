use serde::Serialize;

/// Full per-cell state owned by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Number of mines among the neighbors, meaningless on a mine.
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a reveal could still act on this cell.
    pub const fn is_openable(self) -> bool {
        !self.revealed && !self.flagged
    }
}

/// Player-visible state of a cell.
///
/// `has_mine` and `adjacent_mines` are only filled in once the cell is revealed or the game is
/// over, so a renderer never sees hidden information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub adjacent_mines: Option<u8>,
    pub has_mine: Option<bool>,
}

impl CellView {
    pub const HIDDEN: Self = Self {
        revealed: false,
        flagged: false,
        adjacent_mines: None,
        has_mine: None,
    };

    pub fn new(cell: Cell, expose: bool) -> Self {
        let expose = expose || cell.revealed;
        Self {
            revealed: cell.revealed,
            flagged: cell.flagged,
            adjacent_mines: (expose && !cell.has_mine).then_some(cell.adjacent_mines),
            has_mine: expose.then_some(cell.has_mine),
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::HIDDEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cell_does_not_leak_mine() {
        let cell = Cell {
            has_mine: true,
            ..Default::default()
        };

        assert_eq!(CellView::new(cell, false), CellView::HIDDEN);
        assert_eq!(CellView::new(cell, true).has_mine, Some(true));
        assert_eq!(CellView::new(cell, true).adjacent_mines, None);
    }

    #[test]
    fn revealed_cell_shows_count() {
        let cell = Cell {
            revealed: true,
            adjacent_mines: 3,
            ..Default::default()
        };

        let view = CellView::new(cell, false);

        assert_eq!(view.adjacent_mines, Some(3));
        assert_eq!(view.has_mine, Some(false));
    }

    #[test]
    fn flagged_cell_is_not_openable() {
        let cell = Cell {
            flagged: true,
            ..Default::default()
        };

        assert!(!cell.is_openable());
        assert!(Cell::default().is_openable());
    }
}
