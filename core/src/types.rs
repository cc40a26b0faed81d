/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a `(rows, cols)` grid.
pub const fn area((rows, cols): Coord2) -> CellCount {
    (rows as CellCount) * (cols as CellCount)
}

/// `ndarray` index of a cell.
pub(crate) const fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}

/// The in-bounds cells around `center`, walking its 3x3 window row by row and skipping the
/// center itself.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    // 0..9 over the window, 4 is the center
    step: u8,
}

impl Neighbors {
    pub(crate) const fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            step: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.step < 9 {
            let step = self.step;
            self.step += 1;
            if step == 4 {
                continue;
            }

            let dr = (step / 3) as i8 - 1;
            let dc = (step % 3) as i8 - 1;
            let row = self.center.0.checked_add_signed(dr);
            let col = self.center.1.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col)
                && row < self.size.0
                && col < self.size.1
            {
                return Some((row, col));
            }
        }
        None
    }
}
