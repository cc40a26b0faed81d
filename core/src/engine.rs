use alloc::vec::Vec;
use core::ops::BitOr;
use serde::Serialize;

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A cell whose visible state changed during a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellChange {
    pub coords: Coord2,
    pub cell: CellView,
}

/// What a move did, for the presentation layer to redraw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub outcome: Outcome,
    pub changed: Vec<CellChange>,
}

impl MoveResult {
    pub const fn unchanged() -> Self {
        Self {
            outcome: Outcome::Unchanged,
            changed: Vec::new(),
        }
    }
}

/// One game from the first move to win or loss.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    pub fn new_game(config: BoardConfig, generator: impl BoardGenerator) -> Self {
        log::debug!(
            "New game {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self::new(generator.generate(config))
    }

    /// Throws the current game away and starts over on a fresh board.
    pub fn reset(&mut self, config: BoardConfig, generator: impl BoardGenerator) -> BoardView {
        *self = Self::new_game(config, generator);
        self.view()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_game(self)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MoveResult> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() || self.board[coords].revealed {
            return Ok(MoveResult::unchanged());
        }

        let cell = self.board.cell_mut(coords);
        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }

        Ok(self.finish_move(Outcome::Continue, Vec::from([coords])))
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<MoveResult> {
        let coords = self.board.validate_coords(coords)?;

        let mut changed = Vec::new();
        let outcome = self.reveal_cell(coords, &mut changed);
        Ok(self.finish_move(outcome, changed))
    }

    /// Reveals every neighbor of a revealed number once the flags around it add up.
    pub fn chord(&mut self, coords: Coord2) -> Result<MoveResult> {
        let coords = self.board.validate_coords(coords)?;

        let cell = self.board[coords];
        if self.state.is_finished()
            || !cell.revealed
            || cell.has_mine
            || cell.adjacent_mines == 0
            || self.count_flagged_neighbors(coords) != cell.adjacent_mines
        {
            return Ok(MoveResult::unchanged());
        }

        let mut changed = Vec::new();
        let outcome = self
            .board
            .neighbors(coords)
            .map(|neighbor| self.reveal_cell(neighbor, &mut changed))
            .fold(Outcome::Unchanged, BitOr::bitor);
        Ok(self.finish_move(outcome, changed))
    }

    fn reveal_cell(&mut self, coords: Coord2, changed: &mut Vec<Coord2>) -> Outcome {
        if self.state.is_finished() || !self.board[coords].is_openable() {
            return Outcome::Unchanged;
        }

        if self.board[coords].has_mine {
            self.board.cell_mut(coords).revealed = true;
            changed.push(coords);
            log::debug!("Hit mine at {:?}", coords);
            self.end_game(GameState::Lost, changed);
            return Outcome::Loss;
        }

        self.flood_reveal(coords, changed);

        if self.revealed_count == self.board.safe_cell_count() {
            self.end_game(GameState::Won, changed);
            Outcome::Win
        } else {
            Outcome::Continue
        }
    }

    /// Opens `start` and, through zero cells, everything reachable from it. Cells are marked
    /// revealed when pushed so each one is handled once.
    fn flood_reveal(&mut self, start: Coord2, changed: &mut Vec<Coord2>) {
        self.open_safe(start, changed);
        let mut to_visit = Vec::from([start]);

        while let Some(visit_coords) = to_visit.pop() {
            if self.board[visit_coords].adjacent_mines != 0 {
                continue;
            }

            for neighbor in self.board.neighbors(visit_coords) {
                if self.board[neighbor].is_openable() {
                    self.open_safe(neighbor, changed);
                    to_visit.push(neighbor);
                }
            }
        }
    }

    fn open_safe(&mut self, coords: Coord2, changed: &mut Vec<Coord2>) {
        let cell = self.board.cell_mut(coords);
        cell.revealed = true;
        self.revealed_count += 1;
        changed.push(coords);
        log::trace!(
            "Opened cell at {:?}, mine count: {}",
            coords,
            cell.adjacent_mines
        );
    }

    fn end_game(&mut self, state: GameState, changed: &mut Vec<Coord2>) {
        if self.state.is_finished() {
            return;
        }

        self.state = state;
        let dropped_flags = self.board.reveal_mines(changed);
        self.flagged_count -= dropped_flags;
        log::debug!(
            "Game ended {:?} with {} of {} safe cells revealed",
            state,
            self.revealed_count,
            self.board.safe_cell_count()
        );
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.board
            .neighbors(coords)
            .filter(|&neighbor| self.board[neighbor].flagged)
            .count() as u8
    }

    fn view_at(&self, coords: Coord2) -> CellView {
        CellView::new(self.board[coords], self.state.is_finished())
    }

    fn finish_move(&self, outcome: Outcome, changed: Vec<Coord2>) -> MoveResult {
        let changed = changed
            .into_iter()
            .map(|coords| CellChange {
                coords,
                cell: self.view_at(coords),
            })
            .collect();
        MoveResult { outcome, changed }
    }
}
