use std::fmt;

use sweeper_core::{BoardView, CellView, GameState};

/// Plain text rendering of a board, one row per line with row and column numbers.
pub struct TextBoard<'a>(pub &'a BoardView);

impl fmt::Display for TextBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        write!(f, "   ")?;
        for col in 0..view.size.1 {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for (row, cells) in view.rows().enumerate() {
            write!(f, "{row:>3}")?;
            for cell in cells {
                write!(f, "{:>3}", symbol(cell))?;
            }
            writeln!(f)?;
        }

        match view.state {
            GameState::InProgress => write!(f, "mines left: {}", view.mines_left),
            GameState::Won => write!(f, "You win!"),
            GameState::Lost => write!(f, "Game over"),
        }
    }
}

fn symbol(cell: &CellView) -> char {
    if cell.flagged {
        'F'
    } else if cell.has_mine == Some(true) {
        '*'
    } else if !cell.revealed {
        '#'
    } else {
        match cell.adjacent_mines {
            Some(0) => '.',
            Some(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            None => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Board, Game};

    #[test]
    fn renders_hidden_board() {
        let game = Game::new(Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap());

        let text = TextBoard(&game.view()).to_string();

        assert_eq!(
            text,
            "     0  1  2\n  0  #  #  #\n  1  #  #  #\nmines left: 1"
        );
    }

    #[test]
    fn renders_numbers_flags_and_mines() {
        let mut game = Game::new(Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap());
        game.toggle_flag((0, 0)).unwrap();
        game.reveal((1, 2)).unwrap();

        let text = TextBoard(&game.view()).to_string();
        assert_eq!(
            text,
            "     0  1  2\n  0  F  1  .\n  1  #  1  .\nmines left: 0"
        );
    }

    #[test]
    fn renders_loss() {
        let mut game = Game::new(Board::from_mine_coords((1, 2), &[(0, 1)]).unwrap());
        game.reveal((0, 1)).unwrap();

        let text = TextBoard(&game.view()).to_string();
        assert!(text.ends_with("  0  #  *\nGame over"));
    }
}
