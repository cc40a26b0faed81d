use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Mine count must be less than the number of cells")]
    InvalidMineCount,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("No such preset")]
    UnknownPreset,
}

pub type Result<T> = core::result::Result<T, GameError>;
