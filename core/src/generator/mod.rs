use crate::*;
pub use random::*;
pub use shuffle::*;

mod random;
mod shuffle;

/// Strategy that places mines on a fresh board.
pub trait BoardGenerator {
    fn generate(self, config: BoardConfig) -> Board;
}
