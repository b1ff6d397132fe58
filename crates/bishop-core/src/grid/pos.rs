use crate::grid::{COLS, ROWS};

/// Cell coordinate. Always inside the 17x9 field: the only constructor
/// clamps, and the fields are private.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    col: usize,
    row: usize,
}

/// Grid centre.
pub const START: Position = Position::new(8, 4);

impl Position {
    pub const MAX_COL: usize = COLS - 1;
    pub const MAX_ROW: usize = ROWS - 1;

    /// Out-of-field coordinates are pulled onto the nearest edge.
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self {
            col: if col > Self::MAX_COL { Self::MAX_COL } else { col },
            row: if row > Self::MAX_ROW { Self::MAX_ROW } else { row },
        }
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Shift each axis by at most one cell, holding an axis that would leave
    /// the field while the other still moves.
    #[inline]
    pub fn nudge(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: nudge_axis(self.col, dcol, Self::MAX_COL),
            row: nudge_axis(self.row, drow, Self::MAX_ROW),
        }
    }
}

#[inline]
fn nudge_axis(v: usize, d: i8, max: usize) -> usize {
    match d {
        d if d < 0 => v.saturating_sub(1),
        d if d > 0 => (v + 1).min(max),
        _ => v,
    }
}

impl Default for Position {
    fn default() -> Self {
        START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
